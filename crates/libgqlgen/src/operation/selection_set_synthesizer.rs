use crate::model::ModelCatalog;
use crate::operation::member_collection::collect_candidates;
use crate::operation::CycleTracker;
use crate::operation::SynthesisError;
use crate::operation::SynthesisOptions;
use crate::type_descriptor::TypeDescriptor;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Builds the selection set for a model type by walking its members
/// depth-first.
///
/// Within one type, members appear in this order:
///
/// 1. The type's own members in declaration order, with each delegate's
///    members inlined in place of the delegate. When two collected members
///    share a protocol name, the first one wins.
/// 2. The members of each supertype, nearest first.
///
/// Members that carry a nested selection set are typed by the element type
/// of their (possibly list) type and are expanded recursively. Recursion into
/// a type stops as soon as the [`CycleTracker`] reports a cycle on it, and a
/// nested member whose selection set comes out empty is left out entirely.
///
/// ```
/// use libgqlgen::model::ModelDescription;
/// use libgqlgen::model::ModelMember;
/// use libgqlgen::model::StaticModelCatalog;
/// use libgqlgen::operation::SelectionSetSynthesizer;
/// use libgqlgen::operation::SynthesisOptions;
///
/// let catalog = StaticModelCatalog::new().with(
///     ModelDescription::new("User")
///         .with_member(ModelMember::new("id", "ID").field())
///         .with_member(ModelMember::new("friend", "User").field().with_selection_set()),
/// );
/// let options = SynthesisOptions::new();
///
/// let selection = SelectionSetSynthesizer::new(&catalog, &options)
///     .synthesize(&"User".into())?;
/// assert_eq!(selection, "{id friend{id}}");
/// # Ok::<(), libgqlgen::operation::SynthesisError>(())
/// ```
pub struct SelectionSetSynthesizer<'a> {
    catalog: &'a dyn ModelCatalog,
    options: &'a SynthesisOptions<'a>,
}
impl<'a> SelectionSetSynthesizer<'a> {
    pub fn new(
        catalog: &'a dyn ModelCatalog,
        options: &'a SynthesisOptions<'a>,
    ) -> Self {
        Self {
            catalog,
            options,
        }
    }

    /// Render the selection set of `root`, including its braces.
    ///
    /// Fails with [`SynthesisError::EmptySelection`] if no member of `root`
    /// survives the policies.
    pub fn synthesize(&self, root: &TypeDescriptor) -> Result<String> {
        let root = root.innermost_element_type();
        let mut tracker = CycleTracker::new(self.options.breaking_policy());

        tracker.enter(root.clone());
        let entries = self.selection_entries(root, &mut tracker)?;
        tracker.exit(root);

        if entries.is_empty() {
            return Err(SynthesisError::EmptySelection {
                type_name: root.to_string(),
            });
        }
        Ok(format!("{{{}}}", entries.join(" ")))
    }

    fn selection_entries(
        &self,
        type_descriptor: &TypeDescriptor,
        tracker: &mut CycleTracker<'_>,
    ) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut entries = vec![];
        self.collect_entries(type_descriptor, tracker, &mut seen, &mut entries)?;
        Ok(entries)
    }

    fn collect_entries(
        &self,
        type_descriptor: &TypeDescriptor,
        tracker: &mut CycleTracker<'_>,
        seen: &mut HashSet<String>,
        entries: &mut Vec<String>,
    ) -> Result<()> {
        let candidates =
            collect_candidates(self.catalog, self.options, type_descriptor)?;

        for candidate in candidates {
            let member = &candidate.member;
            let member_type = candidate.member_type.innermost_element_type();

            if member.markers().delegate {
                if tracker.should_stop_recursing(member_type) {
                    log::trace!(
                        "Not inlining delegate `{}` of `{type_descriptor}`: \
                        cycle on `{member_type}`.",
                        member.declared_name(),
                    );
                    continue;
                }
                tracker.enter(member_type.clone());
                let result = self.collect_entries(member_type, tracker, seen, entries);
                tracker.exit(member_type);
                result?;
                continue;
            }

            let protocol_name = member.protocol_name();
            if seen.contains(protocol_name) {
                continue;
            }

            if !member.markers().with_selection_set {
                seen.insert(protocol_name.to_string());
                entries.push(protocol_name.to_string());
                continue;
            }

            if tracker.should_stop_recursing(member_type) {
                log::trace!(
                    "Eliding `{protocol_name}` of `{type_descriptor}`: cycle on \
                    `{member_type}`.",
                );
                continue;
            }

            tracker.enter(member_type.clone());
            let nested = self.selection_entries(member_type, tracker);
            tracker.exit(member_type);
            let nested = nested?;

            if nested.is_empty() {
                continue;
            }
            seen.insert(protocol_name.to_string());
            entries.push(format!("{protocol_name}{{{}}}", nested.join(" ")));
        }

        Ok(())
    }
}
