use crate::model::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn hex(rgb: u32, a: f32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channels as 0..1 floats, sRGB encoded.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

pub const MODULE: Rgba = Rgba::hex(0x1E90FF, 1.0);
pub const CLASS: Rgba = Rgba::hex(0x32CD32, 1.0);
pub const FUNCTION: Rgba = Rgba::hex(0xFFD700, 1.0);
pub const INTERFACE: Rgba = Rgba::hex(0xFF4500, 1.0);
pub const DEFAULT_NODE: Rgba = Rgba::hex(0x9932CC, 1.0);

pub const LINK_HIGHLIGHT: Rgba = Rgba::hex(0xFFFFFF, 0.8);
pub const LINK_DEFAULT: Rgba = Rgba::hex(0xFFFFFF, 0.2);

pub fn node_color(kind: &NodeKind) -> Rgba {
    match kind {
        NodeKind::Module => MODULE,
        NodeKind::Class => CLASS,
        NodeKind::Function => FUNCTION,
        NodeKind::Interface => INTERFACE,
        NodeKind::Other(_) => DEFAULT_NODE,
    }
}
