use super::helper_functions::{field_path, html_name};
use crate::forms::{FormData, Html};

/// Hidden input carrying the calling code picked in the client widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenField {
    name: String,
    parent_path: Vec<String>,
    value: String,
}

impl HiddenField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    pub fn set_parent_path(&mut self, path: &[&str]) -> &mut Self {
        self.parent_path = path.iter().map(|segment| (*segment).to_owned()).collect();
        self
    }

    pub fn set_value(&mut self, value: &str) -> &mut Self {
        self.value = value.to_owned();
        self
    }

    pub fn load_http_data(&mut self, data: &FormData) {
        let value = data
            .get(field_path(&self.parent_path, &self.name).as_slice())
            .unwrap_or_default();
        self.set_value(value);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html_name(&self) -> String {
        html_name(&self.parent_path, &self.name)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn get_control(&self) -> Html {
        let mut control = Html::el("input");
        control
            .attr("type", "hidden")
            .attr("name", self.html_name())
            .attr("value", self.value.as_str());
        control
    }
}
