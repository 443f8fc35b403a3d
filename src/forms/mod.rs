pub mod form_data;
pub mod html;

pub use form_data::{FormData, FormValue};
pub use html::Html;
