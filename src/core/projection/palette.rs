use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::projection::cells::CellClass;
use serde::{Deserialize, Serialize};

/// What a pixel of a bar chart frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPixel {
    Background,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPalette {
    pub empty: Colour,
    pub start: Colour,
    pub end: Colour,
    pub wall: Colour,
    pub open: Colour,
    pub closed: Colour,
    pub path: Colour,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            empty: Colour::rgb(255, 255, 255),
            start: Colour::rgb(40, 167, 69),
            end: Colour::rgb(220, 53, 69),
            wall: Colour::rgb(52, 58, 64),
            open: Colour::rgb(137, 207, 240),
            closed: Colour::rgb(255, 193, 7),
            path: Colour::rgb(111, 66, 193),
        }
    }
}

impl ColourMap<CellClass> for GridPalette {
    fn map(&self, value: CellClass) -> Colour {
        match value {
            CellClass::Empty => self.empty,
            CellClass::Start => self.start,
            CellClass::End => self.end,
            CellClass::Wall => self.wall,
            CellClass::Open => self.open,
            CellClass::Closed => self.closed,
            CellClass::Path => self.path,
        }
    }

    fn display_name(&self) -> &str {
        "Grid"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarPalette {
    pub background: Colour,
    pub bar: Colour,
}

impl Default for BarPalette {
    fn default() -> Self {
        Self {
            background: Colour::rgb(248, 249, 250),
            bar: Colour::rgb(13, 110, 253),
        }
    }
}

impl ColourMap<BarPixel> for BarPalette {
    fn map(&self, value: BarPixel) -> Colour {
        match value {
            BarPixel::Background => self.background,
            BarPixel::Bar => self.bar,
        }
    }

    fn display_name(&self) -> &str {
        "Bars"
    }
}
