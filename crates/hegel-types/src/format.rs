//! Canonical name rendering.
//!
//! Names are the interning key of the graph: two structurally identical nodes
//! built through the same constructor render to the same name and therefore
//! resolve to the same `TypeId`.

use crate::db::TypeDatabase;
use crate::types::{LiteralValue, PropertyInfo, TypeId};
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

/// Generic identity shared by every anonymous index-signature collection.
pub const ANONYMOUS_COLLECTION_IDENTITY: &str = "{ [key] }";

const ANONYMOUS_COLLECTION_PREFIX: &str = "{ [key: ";

/// Display name of `id`.
pub fn type_name(db: &dyn TypeDatabase, id: TypeId) -> Arc<str> {
    match db.lookup(id) {
        Some(node) => Arc::clone(&node.name),
        None => Arc::from(id.to_string()),
    }
}

/// `{ [key: K]: V }`
pub fn collection_name(db: &dyn TypeDatabase, key: TypeId, value: TypeId) -> String {
    format!(
        "{{ [key: {}]: {} }}",
        type_name(db, key),
        type_name(db, value)
    )
}

/// `[A, B]`
pub fn tuple_name(db: &dyn TypeDatabase, items: &[TypeId]) -> String {
    let names: Vec<_> = items.iter().map(|&item| type_name(db, item)).collect();
    format!("[{}]", names.join(", "))
}

/// `A | B`, with member names sorted and deduplicated so that member order
/// never changes the interning key.
pub fn union_name(db: &dyn TypeDatabase, variants: &[TypeId]) -> String {
    let mut names: Vec<_> = variants.iter().map(|&v| type_name(db, v)).collect();
    names.sort();
    names.dedup();
    names.join(" | ")
}

/// `{ a: number, b: string }`
pub fn object_name(db: &dyn TypeDatabase, properties: &[PropertyInfo]) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }
    let members: Vec<_> = properties
        .iter()
        .map(|prop| format!("{}: {}", prop.name, type_name(db, prop.type_id)))
        .collect();
    format!("{{ {} }}", members.join(", "))
}

pub fn literal_name(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(text) => format!("'{text}'"),
        // `-0` renders as `0`; integral values print without a fraction.
        LiteralValue::Number(number) if *number == 0.0 => "0".to_string(),
        LiteralValue::Number(number) => number.to_string(),
        LiteralValue::Boolean(flag) => flag.to_string(),
    }
}

/// Strip every generic-application suffix: `Array<number>` becomes `Array`.
///
/// Everything from the first `<` to the last `>` is removed.
pub fn name_without_applying(name: &str) -> Cow<'_, str> {
    match (name.find('<'), name.rfind('>')) {
        (Some(open), Some(close)) if open < close => {
            Cow::Owned(format!("{}{}", &name[..open], &name[close + 1..]))
        }
        _ => Cow::Borrowed(name),
    }
}

/// Generic identity used when comparing collections for subtyping.
///
/// Named collections (`Array<number>`) are identified by their name without
/// applied arguments. Every anonymous `{ [key: K]: V }` rendering shares
/// [`ANONYMOUS_COLLECTION_IDENTITY`], so anonymous index signatures are
/// compared by shape.
pub fn generic_identity(name: &str) -> Cow<'_, str> {
    if name.starts_with(ANONYMOUS_COLLECTION_PREFIX) {
        return Cow::Borrowed(ANONYMOUS_COLLECTION_IDENTITY);
    }
    name_without_applying(name)
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Replace whole-identifier occurrences of each source name with the target
/// name at the same position, in order.
///
/// `T` inside `{ [key: string]: T }` is replaced, `T` inside `Tree` is not.
pub fn changed_name<S: AsRef<str>>(name: &str, sources: &[S], targets: &[S]) -> String {
    let mut result = name.to_string();
    for (source, target) in sources.iter().zip(targets) {
        let (source, target) = (source.as_ref(), target.as_ref());
        if source.is_empty() {
            continue;
        }
        let Ok(pattern) = Regex::new(&regex::escape(source)) else {
            continue;
        };
        let mut rewritten = String::with_capacity(result.len());
        let mut last = 0;
        for found in pattern.find_iter(&result) {
            let before = result[..found.start()].chars().next_back();
            let after = result[found.end()..].chars().next();
            let bounded = !before.is_some_and(is_identifier_char)
                && !after.is_some_and(is_identifier_char);
            if bounded {
                rewritten.push_str(&result[last..found.start()]);
                rewritten.push_str(target);
                last = found.end();
            }
        }
        rewritten.push_str(&result[last..]);
        result = rewritten;
    }
    result
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
