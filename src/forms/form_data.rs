use std::collections::BTreeMap;

use log::trace;

/// A value submitted with a form: a scalar, or a container of named values
/// when the field name used bracket nesting (`address[phone]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Scalar(String),
    Nested(BTreeMap<String, FormValue>),
}

/// Submitted HTTP form data as a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    root: BTreeMap<String, FormValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tree from already decoded `name=value` pairs.
    ///
    /// Later pairs win over earlier ones with the same name. An empty bracket
    /// segment (`tags[]`) appends under the next free numeric key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (name, value) in pairs {
            data.insert(name.as_ref(), value.into());
        }
        data
    }

    pub fn insert(&mut self, name: &str, value: String) {
        let segments = split_name(name);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut container = &mut self.root;
        for segment in parents {
            let key = resolve_key(container, segment);
            let entry = container
                .entry(key)
                .or_insert_with(|| FormValue::Nested(BTreeMap::new()));
            if let FormValue::Scalar(_) = entry {
                trace!("Form value {} shadowed by nested data", name);
                *entry = FormValue::Nested(BTreeMap::new());
            }
            container = match entry {
                FormValue::Nested(children) => children,
                FormValue::Scalar(_) => return,
            };
        }
        let key = resolve_key(container, last);
        container.insert(key, FormValue::Scalar(value));
    }

    /// Returns the value at `path`, where each segment is one level of
    /// nesting.
    pub fn get_value<S: AsRef<str>>(&self, path: &[S]) -> Option<&FormValue> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(first.as_ref())?;
        for segment in rest {
            current = match current {
                FormValue::Nested(children) => children.get(segment.as_ref())?,
                FormValue::Scalar(_) => return None,
            };
        }
        Some(current)
    }

    /// Returns the scalar at `path`, `None` if missing or nested.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&str> {
        match self.get_value(path)? {
            FormValue::Scalar(value) => Some(value),
            FormValue::Nested(_) => None,
        }
    }
}

/// `a[b][c]` → `["a", "b", "c"]`. A name with unbalanced brackets is used
/// as one plain key.
fn split_name(name: &str) -> Vec<&str> {
    let Some(open) = name.find('[') else {
        return vec![name];
    };
    if open == 0 {
        return vec![name];
    }

    let mut segments = vec![&name[..open]];
    let mut rest = &name[open..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let Some(close) = stripped.find(']') else {
            return vec![name];
        };
        segments.push(&stripped[..close]);
        rest = &stripped[close + 1..];
    }
    if !rest.is_empty() {
        return vec![name];
    }
    segments
}

fn resolve_key(container: &BTreeMap<String, FormValue>, segment: &str) -> String {
    if !segment.is_empty() {
        return segment.to_owned();
    }
    let next = container
        .keys()
        .filter_map(|key| key.parse::<usize>().ok())
        .max()
        .map_or(0, |max| max + 1);
    let mut buf = itoa::Buffer::new();
    buf.format(next).to_owned()
}
