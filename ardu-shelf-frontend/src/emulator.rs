//! Embedded emulator launcher.
//!
//! The emulator is a third-party web page loaded in an iframe. Opening an
//! item inserts a new instance at the top of the emulator container; closing
//! removes the most recent one and hides the container.

use url::form_urlencoded;

/// Origin of the hosted emulator page.
pub const EMULATOR_ORIGIN: &str = "https://felipemanga.github.io/ProjectABE/";

/// Skin parameter passed to the emulator: a bare screen without device art.
pub const EMULATOR_SKIN: &str = "BareFit";

pub const FRAME_WIDTH: u32 = 512;
pub const FRAME_HEIGHT: u32 = 256;

/// Emulator page URL for a binary.
pub fn embed_url(binary_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", binary_url)
        .append_pair("skin", EMULATOR_SKIN)
        .finish();
    format!("{EMULATOR_ORIGIN}?{query}")
}

/// One open emulator iframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorInstance {
    pub binary_url: String,
    pub src: String,
}

/// State of the emulator container.
///
/// Instances are kept newest first. Only one open instance is expected at a
/// time, but nothing prevents several.
#[derive(Debug, Clone, Default)]
pub struct EmulatorPanel {
    instances: Vec<EmulatorInstance>,
    visible: bool,
}

impl EmulatorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an emulator on `binary_url`, ahead of any instance already open.
    pub fn play(&mut self, binary_url: &str) -> &EmulatorInstance {
        let instance = EmulatorInstance {
            binary_url: binary_url.to_string(),
            src: embed_url(binary_url),
        };
        log::debug!("Opening emulator for {binary_url}");
        self.instances.insert(0, instance);
        self.visible = true;
        &self.instances[0]
    }

    /// Remove the most recently opened instance and hide the container.
    pub fn close(&mut self) -> Option<EmulatorInstance> {
        self.visible = false;
        if self.instances.is_empty() {
            return None;
        }
        let closed = self.instances.remove(0);
        log::debug!("Closed emulator for {}", closed.binary_url);
        Some(closed)
    }

    /// Open instances, newest first.
    pub fn instances(&self) -> &[EmulatorInstance] {
        &self.instances
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "tests/emulator_tests.rs"]
mod tests;
