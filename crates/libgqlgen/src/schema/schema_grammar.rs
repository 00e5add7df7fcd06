use crate::schema::DelayedTypeRef;
use crate::schema::EntityKind;
use crate::schema::EntityTable;
use crate::schema::GrammarMismatchError;
use crate::schema::MemberDescriptor;
use crate::schema::MemberTypeRef;
use crate::schema::PendingResolutionKind;
use crate::schema::ResolvedEntity;
use crate::types::TypeAnnotation;
use indexmap::IndexSet;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

type Result<T> = std::result::Result<T, GrammarMismatchError>;

const NAME: &str = r"[_A-Za-z][_0-9A-Za-z]*";

static OBJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)^\s*(type|interface)\s+({NAME})\s*(?:implements\s+([^{{@]*?))?\s*(?:@[^{{]*)?\{{(.*)\}}\s*$"
    )).expect("Invalid object regex")
});

static INPUT_OR_ENUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)^\s*(input|enum)\s+({NAME})\s*(?:@[^{{]*)?\{{(.*)\}}\s*$"
    )).expect("Invalid input/enum regex")
});

static UNION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)^\s*union\s+({NAME})\s*(?:@[^=]*)?=\s*\|?\s*({NAME}(?:\s*\|\s*{NAME})*)\s*$"
    )).expect("Invalid union regex")
});

static SCALAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)^\s*scalar\s+({NAME})\s*(?:@.*)?$"))
        .expect("Invalid scalar regex")
});

static SCHEMA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:extend\s+)?schema\b[^{]*\{(.*)\}\s*$")
        .expect("Invalid schema regex")
});

static ROOT_OPERATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(query|mutation|subscription)\s*:\s*({NAME})"))
        .expect("Invalid root operation regex")
});

static TYPE_DECL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)^\s*(?:extend\s+)?type\s+({NAME})\b"))
        .expect("Invalid type name regex")
});

static DIRECTIVE_DEF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*directive\s+@").expect("Invalid directive regex")
});

static MEMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(concat!(
        r"({NAME})\s*(?:\([^)]*\))?\s*:\s*",
        r"(\[[\s\[\]_0-9A-Za-z!]*\]\s*!?|{NAME}\s*!?)",
        r"(?:\s*=\s*(?:\[[^\]]*\]|\{{[^}}]*\}}|[^\s,@}}]*))?",
        r"(?:\s*@{NAME}(?:\s*\([^)]*\))?)*",
    ), NAME = NAME)).expect("Invalid member regex")
});

static ENUM_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})(?:\s*@{NAME}(?:\s*\([^)]*\))?)*"))
        .expect("Invalid enum value regex")
});

/// A type name that an entity referenced before that name was defined, and
/// the deferred resolution to register against it.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardReference {
    pub(crate) kind: PendingResolutionKind,
    pub(crate) type_name: String,
}
impl ForwardReference {
    pub fn kind(&self) -> &PendingResolutionKind {
        &self.kind
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

/// The result of recognizing a single declaration: the entity itself plus
/// every [`ForwardReference`] it made.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDeclaration {
    pub(crate) entity: ResolvedEntity,
    pub(crate) forward_references: Vec<ForwardReference>,
}
impl ParsedDeclaration {
    pub fn entity(&self) -> &ResolvedEntity {
        &self.entity
    }

    pub fn forward_references(&self) -> &[ForwardReference] {
        self.forward_references.as_slice()
    }
}

/// Pattern-based recognizer for individual (already isolated) schema
/// declarations.
///
/// Recognized shapes are `type`, `interface`, `input`, `enum`, `union` and
/// `scalar` declarations. Root operation types (`Query`, `Mutation`,
/// `Subscription`, or whatever a `schema { ... }` block names) and directive
/// definitions are not entities and are filtered out by
/// [`SchemaGrammar::is_filtered()`] before recognition.
///
/// Declarations are expected to have had comments and strings removed.
#[derive(Clone, Debug)]
pub struct SchemaGrammar {
    root_type_names: IndexSet<String>,
}
impl SchemaGrammar {
    pub fn new() -> Self {
        Self {
            root_type_names: IndexSet::from([
                "Query".to_string(),
                "Mutation".to_string(),
                "Subscription".to_string(),
            ]),
        }
    }

    /// If `declaration` is a `schema { ... }` block, record the root operation
    /// type names it maps and return `true`.
    pub fn learn_root_types(&mut self, declaration: &str) -> bool {
        let Some(caps) = SCHEMA_REGEX.captures(declaration) else {
            return false;
        };
        for root in ROOT_OPERATION_REGEX.captures_iter(&caps[1]) {
            self.root_type_names.insert(root[2].to_string());
        }
        true
    }

    /// Whether `declaration` is a root operation type, a `schema` block or a
    /// directive definition. None of these describe entities.
    pub fn is_filtered(&self, declaration: &str) -> bool {
        if SCHEMA_REGEX.is_match(declaration)
            || DIRECTIVE_DEF_REGEX.is_match(declaration) {
            return true;
        }
        TYPE_DECL_NAME_REGEX.captures(declaration)
            .is_some_and(|caps| self.root_type_names.contains(&caps[1]))
    }

    pub fn is_root_type_name(&self, name: &str) -> bool {
        self.root_type_names.contains(name)
    }

    pub fn root_type_names(&self) -> impl Iterator<Item = &str> {
        self.root_type_names.iter().map(|name| name.as_str())
    }

    /// Recognize one declaration. Member and interface types that name
    /// entities already present in `table` are resolved immediately; all
    /// others become [`ForwardReference`]s.
    pub fn recognize(
        &self,
        declaration: &str,
        table: &EntityTable,
    ) -> Result<ParsedDeclaration> {
        if let Some(caps) = OBJECT_REGEX.captures(declaration) {
            let kind = match &caps[1] {
                "interface" => EntityKind::Interface,
                _ => EntityKind::Object,
            };
            let implements = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            return self.recognize_object(
                declaration,
                table,
                kind,
                &caps[2],
                implements,
                &caps[4],
            );
        }

        if let Some(caps) = INPUT_OR_ENUM_REGEX.captures(declaration) {
            return match &caps[1] {
                "enum" => Self::recognize_enum(declaration, &caps[2], &caps[3]),
                _ => {
                    let mut parsed = ParsedDeclaration {
                        entity: ResolvedEntity::new(EntityKind::Input, &caps[2]),
                        forward_references: vec![],
                    };
                    Self::recognize_members(declaration, table, &caps[3], &mut parsed)?;
                    Ok(parsed)
                },
            };
        }

        if let Some(caps) = UNION_REGEX.captures(declaration) {
            return Ok(Self::recognize_union(table, &caps[1], &caps[2]));
        }

        if let Some(caps) = SCALAR_REGEX.captures(declaration) {
            return Ok(ParsedDeclaration {
                entity: ResolvedEntity::new(EntityKind::Scalar, &caps[1]),
                forward_references: vec![],
            });
        }

        let reason =
            if declaration.trim_start().starts_with("extend") {
                "type extensions are not supported"
            } else {
                "not a type, interface, input, enum, union or scalar declaration"
            };
        Err(GrammarMismatchError::new(declaration, reason))
    }

    fn recognize_enum(
        declaration: &str,
        name: &str,
        body: &str,
    ) -> Result<ParsedDeclaration> {
        let mut entity = ResolvedEntity::new(EntityKind::Enum, name);
        let body = collapse_parenthesized(body);
        for_each_separated_match(&ENUM_VALUE_REGEX, &body, |caps| {
            entity.enum_values.push(caps[1].to_string());
            Ok(())
        }).map_err(|gap| GrammarMismatchError::new(
            declaration,
            format!("malformed enum value near `{gap}`"),
        ))?;

        Ok(ParsedDeclaration {
            entity,
            forward_references: vec![],
        })
    }

    fn recognize_members(
        declaration: &str,
        table: &EntityTable,
        body: &str,
        parsed: &mut ParsedDeclaration,
    ) -> Result<()> {
        let entity_name = parsed.entity.name.clone();
        let mut bad_annotation = None;
        let body = collapse_parenthesized(body);
        for_each_separated_match(&MEMBER_REGEX, &body, |caps| {
            let Some(type_annotation) = TypeAnnotation::parse(&caps[2]) else {
                bad_annotation = Some(caps[2].trim().to_string());
                return Err(caps[0].to_string());
            };

            let type_name =
                type_annotation.innermost_named_type_annotation();
            let member_type =
                if let Some(scalar) = type_name.builtin_scalar() {
                    MemberTypeRef::Builtin(scalar)
                } else if let Some(id) = table.id_of(type_name.graphql_type_name()) {
                    MemberTypeRef::Entity(id)
                } else {
                    parsed.forward_references.push(ForwardReference {
                        kind: PendingResolutionKind::MemberType {
                            member_index: parsed.entity.members.len(),
                        },
                        type_name: type_name.graphql_type_name().to_string(),
                    });
                    MemberTypeRef::Delayed(DelayedTypeRef::new(
                        type_name.graphql_type_name(),
                        entity_name.as_str(),
                    ))
                };

            parsed.entity.members.push(MemberDescriptor::new(
                &caps[1],
                type_annotation,
                member_type,
            ));
            Ok(())
        }).map_err(|gap| GrammarMismatchError::new(
            declaration,
            match &bad_annotation {
                Some(annot) => format!("malformed type annotation `{annot}`"),
                None => format!("malformed member near `{gap}`"),
            },
        ))
    }

    fn recognize_object(
        &self,
        declaration: &str,
        table: &EntityTable,
        kind: EntityKind,
        name: &str,
        implements: &str,
        body: &str,
    ) -> Result<ParsedDeclaration> {
        let mut parsed = ParsedDeclaration {
            entity: ResolvedEntity::new(kind, name),
            forward_references: vec![],
        };

        for iface_name in implements.split(['&', ',', ' ', '\t', '\n', '\r']) {
            if iface_name.is_empty() {
                continue;
            }
            if !is_name(iface_name) {
                return Err(GrammarMismatchError::new(
                    declaration,
                    format!("malformed interface name `{iface_name}`"),
                ));
            }
            match table.id_of(iface_name) {
                Some(id) => {
                    parsed.entity.implemented_interfaces.insert(id);
                },
                None => parsed.forward_references.push(ForwardReference {
                    kind: PendingResolutionKind::Implements,
                    type_name: iface_name.to_string(),
                }),
            }
        }

        Self::recognize_members(declaration, table, body, &mut parsed)?;
        Ok(parsed)
    }

    /// Union members are always registered as forward references so that
    /// the back-reference into each member's `implemented_interfaces` is
    /// applied the same way regardless of declaration order.
    fn recognize_union(
        table: &EntityTable,
        name: &str,
        members: &str,
    ) -> ParsedDeclaration {
        let mut parsed = ParsedDeclaration {
            entity: ResolvedEntity::new(EntityKind::Union, name),
            forward_references: vec![],
        };

        for member_name in members.split('|').map(str::trim) {
            let type_ref = match table.id_of(member_name) {
                Some(id) => DelayedTypeRef::resolved(member_name, name, id),
                None => DelayedTypeRef::new(member_name, name),
            };
            parsed.forward_references.push(ForwardReference {
                kind: PendingResolutionKind::UnionMembership {
                    possible_type_index: parsed.entity.possible_types.len(),
                },
                type_name: member_name.to_string(),
            });
            parsed.entity.possible_types.push(type_ref);
        }

        parsed
    }
}
impl Default for SchemaGrammar {
    fn default() -> Self {
        Self::new()
    }
}

fn is_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replace the contents of every balanced `( ... )` group with nothing, so
/// argument lists and directive arguments (which may nest parentheses of their
/// own) reduce to `()`. Unbalanced parentheses are left in place for the
/// member grammar to reject.
fn collapse_parenthesized(text: &str) -> Cow<'_, str> {
    if !text.contains('(') {
        return Cow::Borrowed(text);
    }

    let mut collapsed = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut group_start = 0;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => {
                if depth == 0 {
                    group_start = idx;
                }
                depth += 1;
            },
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    collapsed.push_str("()");
                }
            },
            _ if depth > 0 => (),
            _ => collapsed.push(c),
        }
    }
    if depth > 0 {
        collapsed.push_str(&text[group_start..]);
    }
    Cow::Owned(collapsed)
}

/// Run `on_match` for every match of `regex` within `body`, requiring that the
/// text between (and around) matches consists only of whitespace and commas.
/// On failure, returns the offending text.
fn for_each_separated_match(
    regex: &Regex,
    body: &str,
    mut on_match: impl FnMut(&regex::Captures<'_>) -> std::result::Result<(), String>,
) -> std::result::Result<(), String> {
    let is_separator = |text: &str| {
        text.chars().all(|c| c.is_whitespace() || c == ',')
    };

    let mut last_end = 0;
    for caps in regex.captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let gap = &body[last_end..whole.start()];
        if !is_separator(gap) {
            return Err(gap.trim().to_string());
        }
        on_match(&caps)?;
        last_end = whole.end();
    }

    let trailing = &body[last_end..];
    if !is_separator(trailing) {
        return Err(trailing.trim().to_string());
    }
    Ok(())
}
