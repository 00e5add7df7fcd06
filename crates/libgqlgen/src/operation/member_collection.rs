use crate::model::ModelCatalog;
use crate::model::ModelMember;
use crate::operation::SynthesisError;
use crate::operation::SynthesisOptions;
use crate::type_descriptor::TypeDescriptor;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SynthesisError>;

/// A member that passed the marking and picking policies, with its type bound
/// to the generic arguments of the descriptor it was collected through.
#[derive(Clone, Debug)]
pub(crate) struct CandidateMember {
    pub member: ModelMember,
    pub member_type: TypeDescriptor,
}

/// Members of `type_descriptor` in document order: the type's own members
/// first, then those of each supertype up the chain.
///
/// Delegates are returned as-is; expanding them is up to the caller since the
/// selection-set and value paths expand them differently.
pub(crate) fn collect_candidates(
    catalog: &dyn ModelCatalog,
    options: &SynthesisOptions<'_>,
    type_descriptor: &TypeDescriptor,
) -> Result<Vec<CandidateMember>> {
    let mut candidates = vec![];
    let mut visited = HashSet::new();
    let mut current = Some(type_descriptor.clone());

    while let Some(type_descriptor) = current.take() {
        if !visited.insert(type_descriptor.clone()) {
            log::warn!(
                "Supertype chain of `{type_descriptor}` loops back onto itself.",
            );
            break;
        }

        let description = catalog.describe(&type_descriptor).ok_or_else(|| {
            SynthesisError::UnknownModelType {
                type_name: type_descriptor.to_string(),
            }
        })?;

        for member in description.members() {
            if !options.marking_policy.is_marked(member)
                || !options.picking_policy.is_picked(member) {
                continue;
            }
            candidates.push(CandidateMember {
                member_type: description.bound_member_type(member, &type_descriptor),
                member: member.clone(),
            });
        }

        current = description.supertype().cloned();
    }

    Ok(candidates)
}
