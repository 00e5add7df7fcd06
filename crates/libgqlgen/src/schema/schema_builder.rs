use crate::delayed_resolver::DelayedResolver;
use crate::schema::declaration_splitter::strip_trivia;
use crate::schema::split_declarations;
use crate::schema::EntityGraph;
use crate::schema::EntityId;
use crate::schema::EntityKind;
use crate::schema::EntityTable;
use crate::schema::GrammarMismatchError;
use crate::schema::MemberTypeRef;
use crate::schema::PendingResolution;
use crate::schema::ResolvedEntity;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaGrammar;
use crate::schema::UnresolvedReferenceError;
use std::collections::HashSet;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Loads batches of schema text into an [`EntityTable`] and, once every
/// declaration of the batch has been loaded, freezes the table into an
/// [`EntityGraph`] via [`SchemaBuilder::build()`].
///
/// ```
/// use libgqlgen::schema::SchemaBuilder;
///
/// let graph = SchemaBuilder::new()
///     .load_str(None, "type User { id: ID! best_friend: User }")?
///     .build();
///
/// assert!(graph.entity("User").is_some());
/// # Ok::<(), libgqlgen::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    delayed_resolver: DelayedResolver<PendingResolution>,
    grammar: SchemaGrammar,
    mismatches: Vec<GrammarMismatchError>,
    table: EntityTable,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            delayed_resolver: DelayedResolver::new(),
            grammar: SchemaGrammar::new(),
            mismatches: vec![],
            table: EntityTable::new(),
        }
    }

    /// Fire every registered deferred resolution exactly once against the
    /// completed [`EntityTable`] and produce the frozen [`EntityGraph`].
    ///
    /// A reference to a name that was never defined is fatal only to the
    /// entities that depend on it: the referencing entity is dropped, and so
    /// is every entity that references a dropped entity, transitively. Each
    /// drop is recorded as an [`UnresolvedReferenceError`] available from
    /// [`EntityGraph::unresolved_references()`]; everything else survives.
    ///
    /// Entities named as root operation types by a `schema { ... }` block
    /// that was loaded after them are dropped here as well.
    pub fn build(mut self) -> EntityGraph {
        let mut dropped = HashSet::new();
        for entity in self.table.iter() {
            if self.grammar.is_root_type_name(entity.name()) {
                log::trace!("Dropped root operation type `{}`.", entity.name());
                dropped.insert(entity.id());
            }
        }
        let root_type_ids = dropped.clone();

        let mut unresolved = vec![];
        for name in self.delayed_resolver.names() {
            let Err(errors) = self.delayed_resolver.resolve_all(name, &mut self.table) else {
                continue;
            };
            for error in errors {
                let Some(entity_id) = self.table.id_of(error.referenced_by()) else {
                    continue;
                };
                if root_type_ids.contains(&entity_id) {
                    continue;
                }
                dropped.insert(entity_id);
                unresolved.push(error);
            }
        }
        self.drop_dependents(&mut dropped, &mut unresolved);

        for error in &unresolved {
            log::warn!("Dropped `{}`: {error}", error.referenced_by());
        }
        log::debug!(
            "Froze entity graph with {} of {} entities ({} deferred \
            resolutions, {} skipped declarations).",
            self.table.len() - dropped.len(),
            self.table.len(),
            self.delayed_resolver.num_callbacks(),
            self.mismatches.len(),
        );
        EntityGraph::new(self.table.without(&dropped), self.mismatches, unresolved)
    }

    /// Grow `dropped` until no surviving entity references a dropped one,
    /// recording why each newly dropped entity went.
    fn drop_dependents(
        &self,
        dropped: &mut HashSet<EntityId>,
        unresolved: &mut Vec<UnresolvedReferenceError>,
    ) {
        loop {
            let mut newly_dropped = vec![];
            for entity in self.table.iter() {
                if dropped.contains(&entity.id()) {
                    continue;
                }
                let broken_dependency =
                    dependencies(&self.table, entity)
                        .find(|id| dropped.contains(id))
                        .and_then(|id| self.table.get(id));
                if let Some(dependency) = broken_dependency {
                    newly_dropped.push(entity.id());
                    unresolved.push(UnresolvedReferenceError {
                        referenced_by: entity.name().to_string(),
                        type_name: dependency.name().to_string(),
                    });
                }
            }
            if newly_dropped.is_empty() {
                return;
            }
            dropped.extend(newly_dropped);
        }
    }

    /// Read each file in `file_paths` and load its contents.
    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err: err.to_string(),
                })?;
            self = self.load_str(
                Some(file_path.to_string_lossy().as_ref()),
                content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Split `content` into declarations and recognize each one.
    ///
    /// Declarations that match no known shape are skipped (and logged); they
    /// are available afterwards from [`SchemaBuilder::mismatches()`]. Only a
    /// duplicate entity name fails the load.
    pub fn load_str(
        mut self,
        source_name: Option<&str>,
        content: &str,
    ) -> Result<Self> {
        let declarations: Vec<String> =
            split_declarations(content).into_iter()
                .map(strip_trivia)
                .collect();

        for declaration in &declarations {
            self.grammar.learn_root_types(declaration);
        }

        let mut num_loaded = 0;
        for declaration in &declarations {
            if self.grammar.is_filtered(declaration) {
                log::trace!("Filtered declaration: `{}`", declaration.trim());
                continue;
            }

            let parsed = match self.grammar.recognize(declaration, &self.table) {
                Ok(parsed) => parsed,
                Err(mut mismatch) => {
                    mismatch.source_name = source_name.map(str::to_string);
                    log::warn!("{mismatch}");
                    self.mismatches.push(mismatch);
                    continue
                },
            };

            let entity_id = self.table.insert(parsed.entity)?;
            for forward_ref in parsed.forward_references {
                self.delayed_resolver.add(
                    forward_ref.type_name,
                    PendingResolution {
                        entity: entity_id,
                        kind: forward_ref.kind,
                    },
                );
            }
            num_loaded += 1;
        }

        log::debug!(
            "Loaded {num_loaded} of {} declarations from {}.",
            declarations.len(),
            source_name.unwrap_or("<str>"),
        );
        Ok(self)
    }

    /// Declarations skipped so far because they matched no known shape.
    pub fn mismatches(&self) -> &[GrammarMismatchError] {
        self.mismatches.as_slice()
    }

    /// The deferred resolutions registered so far, keyed by the name each is
    /// waiting on.
    pub fn pending_resolutions(&self) -> &DelayedResolver<PendingResolution> {
        &self.delayed_resolver
    }

    pub fn table(&self) -> &EntityTable {
        &self.table
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Entities `entity` cannot exist without: its member types, its union
/// members and the interfaces it implements. Unions that list `entity` are
/// not dependencies of it.
fn dependencies<'a>(
    table: &'a EntityTable,
    entity: &'a ResolvedEntity,
) -> impl Iterator<Item = EntityId> + 'a {
    let member_types = entity.members().iter().filter_map(|member| {
        match member.member_type() {
            MemberTypeRef::Builtin(_) => None,
            MemberTypeRef::Entity(id) => Some(*id),
            MemberTypeRef::Delayed(type_ref) => type_ref.resolved_id(),
        }
    });
    let possible_types =
        entity.possible_types().iter()
            .filter_map(|type_ref| type_ref.resolved_id());
    let interfaces =
        entity.implemented_interfaces().iter()
            .copied()
            .filter(|id| {
                table.get(*id).is_some_and(|iface| iface.kind() != EntityKind::Union)
            });

    member_types.chain(possible_types).chain(interfaces)
}
