use std::fmt::{self, Display, Write as _};

const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    Text(String),
    /// Rendered as a bare attribute name (`required`).
    Flag,
}

/// Minimal HTML element: attributes keep insertion order, classes are
/// rendered into one `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html {
    name: String,
    attrs: Vec<(String, AttrValue)>,
    classes: Vec<String>,
    text: Option<String>,
}

impl Html {
    pub fn el(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing an existing one with the same name.
    pub fn attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.set(name, AttrValue::Text(value.into()));
        self
    }

    /// Adds or removes a boolean attribute.
    pub fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.set(name, AttrValue::Flag);
        } else {
            self.remove_attr(name);
        }
        self
    }

    /// Sets a `data-<name>` attribute.
    pub fn data(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attr(&fast_cat::concat_str!("data-", name), value)
    }

    pub fn add_class(&mut self, class: &str) -> &mut Self {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(attr, _)| attr != name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the attribute value; bare attributes yield `Some("")`.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attrs.iter().find(|(attr, _)| attr == name).map(|(_, value)| match value {
            AttrValue::Text(text) => text.as_str(),
            AttrValue::Flag => "",
        })
    }

    pub fn get_data(&self, name: &str) -> Option<&str> {
        self.get_attribute(&fast_cat::concat_str!("data-", name))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set(&mut self, name: &str, value: AttrValue) {
        match self.attrs.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }
}

impl Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        f.write_str(&self.name)?;
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Text(text) => write!(f, " {}=\"{}\"", name, escape_attr(text))?,
                AttrValue::Flag => write!(f, " {}", name)?,
            }
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape_attr(&self.classes.join(" ")))?;
        }
        f.write_char('>')?;

        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return Ok(());
        }
        if let Some(text) = &self.text {
            f.write_str(&escape_text(text))?;
        }
        write!(f, "</{}>", self.name)
    }
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
