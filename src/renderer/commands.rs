//! Draw primitives and the surface they are replayed on

/// One 2D drawing primitive with its CSS fill color
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: String },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// A 2D drawing surface (a canvas context, a test recorder, ...)
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Replay `commands` in order onto `surface`
pub fn render<S: Surface + ?Sized>(surface: &mut S, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear { color } => {
                let (w, h) = surface.size();
                surface.fill_rect(0.0, 0.0, w, h, color);
            }
            DrawCommand::Rect { x, y, w, h, color } => surface.fill_rect(*x, *y, *w, *h, color),
            DrawCommand::Circle { x, y, r, color } => surface.fill_circle(*x, *y, *r, color),
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                color,
            } => surface.fill_text(text, *x, *y, font, color),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Surface that records calls as strings
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub calls: Vec<String>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (f32, f32) {
            (800.0, 500.0)
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
            self.calls.push(format!("rect {x} {y} {w} {h} {color}"));
        }
        fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
            self.calls.push(format!("circle {x} {y} {r} {color}"));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &str, color: &str) {
            self.calls.push(format!("text {text} {x} {y} {color}"));
        }
    }

    #[test]
    fn test_clear_fills_surface() {
        let mut recorder = Recorder::default();
        render(
            &mut recorder,
            &[
                DrawCommand::Clear {
                    color: "#000".into(),
                },
                DrawCommand::Circle {
                    x: 1.0,
                    y: 2.0,
                    r: 3.0,
                    color: "#fff".into(),
                },
            ],
        );
        assert_eq!(recorder.calls, vec!["rect 0 0 800 500 #000", "circle 1 2 3 #fff"]);
    }
}
