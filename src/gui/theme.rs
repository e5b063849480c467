use crate::config::{ConfigColor, PaletteConfig};
use crate::gui::dial::Speed;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct DialColors {
    pub off: Srgba<f64>,
    pub low: Srgba<f64>,
    pub medium: Srgba<f64>,
    pub high: Srgba<f64>,
    pub indicator: Srgba<f64>,
}

impl DialColors {
    pub fn from_context(context: &gtk::StyleContext, palette: &PaletteConfig) -> Self {
        Self {
            off: off_gray(),
            low: Self::lookup_color(context, "fan_color_1", palette.fan_color_1),
            medium: Self::lookup_color(context, "fan_color_2", palette.fan_color_2),
            high: Self::lookup_color(context, "fan_color_3", palette.fan_color_3),
            indicator: Srgba::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// The config file wins, then a `@define-color` from the GTK theme, then
    /// fully transparent.
    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        configured: Option<ConfigColor>,
    ) -> Srgba<f64> {
        configured
            .map(ConfigColor::to_srgba)
            .or_else(|| {
                context.lookup_color(name).map(|c| {
                    Srgba::new(
                        c.red() as f64,
                        c.green() as f64,
                        c.blue() as f64,
                        c.alpha() as f64,
                    )
                })
            })
            .unwrap_or(Srgba::new(0.0, 0.0, 0.0, 0.0))
    }

    pub fn fill_for(&self, speed: Speed) -> Srgba<f64> {
        match speed {
            Speed::Off => self.off,
            Speed::Low => self.low,
            Speed::Medium => self.medium,
            Speed::High => self.high,
        }
    }
}

/// The off state ignores the palette entirely.
pub fn off_gray() -> Srgba<f64> {
    Srgba::new(0.53, 0.53, 0.53, 1.0)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.fandial-window {
    background-color: #1e1e24;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
