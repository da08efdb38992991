pub const INTERACTIVE_SELECTOR: &str = "button, a, .glass-card";
pub const GLOW_CLASS: &str = "cursor-glow";
pub const GLOW_BASE_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    background: radial-gradient(circle, rgba(97, 218, 251, 0.6) 0%, transparent 70%); \
    border-radius: 50%; pointer-events: none; z-index: 9999; mix-blend-mode: screen; \
    transition: transform 0.1s ease;";

const GLOW_HALF_SIZE_PX: f64 = 10.0;
const HOVER_SCALE: f64 = 1.5;

pub fn enabled_for(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorGlow {
    mouse_x: f64,
    mouse_y: f64,
    hovering: bool,
}

impl CursorGlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the glow's top-left corner, centred on the pointer.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> (f64, f64) {
        self.mouse_x = x;
        self.mouse_y = y;
        self.position()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.mouse_x - GLOW_HALF_SIZE_PX, self.mouse_y - GLOW_HALF_SIZE_PX)
    }

    pub fn on_hover_enter(&mut self) -> String {
        self.hovering = true;
        self.transform()
    }

    pub fn on_hover_leave(&mut self) -> String {
        self.hovering = false;
        self.transform()
    }

    pub fn scale(&self) -> f64 {
        if self.hovering {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.scale())
    }
}
