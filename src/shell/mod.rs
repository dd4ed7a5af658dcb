pub mod page;

pub use page::{render_page, render_quote_section, PageState};
