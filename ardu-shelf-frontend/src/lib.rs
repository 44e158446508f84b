//! HTML rendering for repository catalogs.
//!
//! [`view`] turns projections into a view tree, [`html`] writes that tree as
//! a page, and [`emulator`]/[`style`] hold the state of the two page
//! affordances.

pub mod emulator;
pub mod error;
pub mod escape;
pub mod html;
pub mod style;
pub mod view;

pub use emulator::{EmulatorInstance, EmulatorPanel, embed_url};
pub use error::FrontendError;
pub use escape::escape_html;
pub use html::{PageLayout, save_page, write_page};
pub use style::{DEFAULT_VIEWPORT_WIDTH, StyleToggle, WIDE_VIEWPORT};
pub use view::{ItemBlock, RenderOptions, RenderedView, deep_link, render_view};
