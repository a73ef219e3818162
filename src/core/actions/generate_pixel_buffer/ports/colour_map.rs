use crate::core::data::colour::Colour;

/// Maps one sampled value to the colour it is drawn with.
pub trait ColourMap<T>: Sync {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
