use super::model::{DialState, Speed};
use super::LABEL_FONT_SIZE;
use crate::config::Labels;
use crate::gui::theme::DialColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;
use strum::IntoEnumIterator;

pub fn draw(
    cr: &Context,
    state: &DialState,
    colors: &DialColors,
    labels: &Labels,
) -> Result<(), cairo::Error> {
    let fill = colors.fill_for(state.speed);

    draw_dial(cr, state, fill)?;
    draw_indicator(cr, state, colors.indicator)?;
    draw_labels(cr, state, fill, labels)
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn draw_dial(cr: &Context, state: &DialState, fill: Srgba<f64>) -> Result<(), cairo::Error> {
    set_source(cr, fill);
    cr.arc(state.center.x, state.center.y, state.radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_indicator(
    cr: &Context,
    state: &DialState,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let p = state.indicator_point();
    set_source(cr, color);
    cr.arc(p.x, p.y, state.indicator_radius(), 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_labels(
    cr: &Context,
    state: &DialState,
    fill: Srgba<f64>,
    labels: &Labels,
) -> Result<(), cairo::Error> {
    // labels reuse the fill colour selected for the current speed
    set_source(cr, fill);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(LABEL_FONT_SIZE);

    for speed in Speed::iter() {
        let p = state.label_point(speed);
        let text = speed.label(labels);
        if let Ok(ext) = cr.text_extents(text) {
            cr.move_to(p.x - ext.width() / 2.0, p.y + ext.height() / 2.0);
            cr.show_text(text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::theme::{off_gray, DialColors};

    fn test_colors() -> DialColors {
        DialColors {
            off: off_gray(),
            low: Srgba::new(0.56, 0.75, 0.43, 1.0),
            medium: Srgba::new(0.97, 0.59, 0.12, 1.0),
            high: Srgba::new(0.98, 0.25, 0.27, 1.0),
            indicator: Srgba::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    fn offscreen(width: i32, height: i32) -> Context {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .expect("surface");
        Context::new(&surface).expect("context")
    }

    #[test]
    fn test_draw_renders_every_speed() {
        let cr = offscreen(200, 200);
        let labels = Labels::default();
        let mut state = DialState::default();
        state.resize(200, 200);

        for _ in 0..4 {
            draw(&cr, &state, &test_colors(), &labels).unwrap();
            state.advance();
        }
    }

    #[test]
    fn test_draw_handles_a_collapsed_dial() {
        let cr = offscreen(1, 1);
        let state = DialState::default();

        draw(&cr, &state, &test_colors(), &Labels::default()).unwrap();
    }
}
