pub trait ColourMap {
    fn map(&self, value: u32) -> u32;
}
