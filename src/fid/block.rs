use super::Block;

impl super::Block {
    /// Constructor.
    pub fn new(value: u16, length: u8) -> Block {
        Block { value, length }
    }

    /// Returns the cumulative popcount up to (and including) this block,
    /// counted from the first bit of the chunk it belongs to.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Returns the bit length of this block.
    pub fn length(&self) -> u8 {
        self.length
    }
}
