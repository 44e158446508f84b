//! Serialize a [`RenderedView`] into a standalone HTML page.

use std::fs;
use std::path::Path;

use crate::FrontendError;
use crate::emulator::{EmulatorPanel, FRAME_HEIGHT, FRAME_WIDTH};
use crate::escape::escape_html;
use crate::style::StyleToggle;
use crate::view::{ItemBlock, RenderedView};

/// Static parts of the page that do not depend on the catalog.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub document_title: String,
    pub stylesheet: String,
    /// Alternate stylesheet toggled by viewport width.
    pub list_stylesheet: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            document_title: "Arduboy Repository Viewer".to_string(),
            stylesheet: "css/style.css".to_string(),
            list_stylesheet: "css/list.css".to_string(),
        }
    }
}

/// Write the complete page for a view.
pub fn write_page(
    view: &RenderedView,
    layout: &PageLayout,
    style: &StyleToggle,
    emulator: &EmulatorPanel,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "  <title>{}</title>\n",
        escape_html(&layout.document_title)
    ));
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}\">\n",
        escape_html(&layout.stylesheet)
    ));
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" id=\"style_list\" href=\"{}\"{}>\n",
        escape_html(&layout.list_stylesheet),
        if style.is_disabled() { " disabled" } else { "" }
    ));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("  <h1 id=\"header\">{}</h1>\n", view.header_html));

    write_emulator(&mut html, emulator);

    html.push_str(&format!(
        "  <div id=\"result\"{}>\n",
        display_attr(view.result_visible)
    ));
    for block in &view.blocks {
        write_block(&mut html, block);
    }
    html.push_str("  </div>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Write a page to disk, creating parent directories as needed.
pub fn save_page(path: &Path, html: &str) -> Result<(), FrontendError> {
    if path.is_dir() {
        return Err(FrontendError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(())
}

fn display_attr(visible: bool) -> &'static str {
    if visible { "" } else { " style=\"display:none\"" }
}

fn write_block(html: &mut String, block: &ItemBlock) {
    html.push_str("    <div class=\"item\">\n");
    html.push_str(&format!(
        "      <img class=\"item_image\" src=\"{}\">\n",
        escape_html(&block.image_src)
    ));
    html.push_str(&format!(
        "      <div class=\"item_title\">{}</div>\n",
        block.title_html
    ));
    html.push_str("      <div class=\"item_info\">");
    for span in &block.info_spans {
        html.push_str("<span>");
        html.push_str(span);
        html.push_str("</span>");
    }
    html.push_str("</div>\n");
    html.push_str("      <div class=\"item_links\">\n");
    html.push_str(&format!(
        "        <a class=\"item_link_binary\" href=\"{}\">Download</a>\n",
        escape_html(&block.binary_href)
    ));
    html.push_str(&format!(
        "        <a class=\"item_link_arduboy\" href=\"{}\">Open</a>\n",
        escape_html(&block.deep_link_href)
    ));
    if let Some(ref play) = block.play_href {
        html.push_str(&format!(
            "        <a class=\"item_play\" href=\"{}\" target=\"_blank\">Play</a>\n",
            escape_html(play)
        ));
    }
    html.push_str("      </div>\n");
    html.push_str("    </div>\n");
}

fn write_emulator(html: &mut String, emulator: &EmulatorPanel) {
    html.push_str(&format!(
        "  <div id=\"emulator\"{}>\n",
        display_attr(emulator.is_visible())
    ));
    for instance in emulator.instances() {
        html.push_str(&format!(
            "    <iframe class=\"emulator_frame\" src=\"{}\" width=\"{}\" height=\"{}\"></iframe>\n",
            escape_html(&instance.src),
            FRAME_WIDTH,
            FRAME_HEIGHT
        ));
    }
    html.push_str("  </div>\n");
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
