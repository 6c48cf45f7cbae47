use super::{Block, Blocks, Chunks};
use crate::internal_data_structure::raw_bit_vector::RawBitVector;

impl super::Blocks {
    /// Constructor. Builds every block belonging to chunk number `i_chunk`,
    /// which spans `chunk_length` bits of `rbv` starting at
    /// `i_chunk * Chunks::calc_chunk_size(rbv.length())`.
    pub fn new(rbv: &RawBitVector, i_chunk: u64, chunk_length: u16) -> Blocks {
        let n = rbv.length();
        let block_size = Blocks::calc_block_size(n);
        let chunk_size = Chunks::calc_chunk_size(n);
        let pos_chunk_start = i_chunk * chunk_size as u64;

        let blocks_cnt = (chunk_length as u64 / block_size as u64
            + if chunk_length as u64 % block_size as u64 == 0 {
                0
            } else {
                1
            }) as u16;

        let mut blocks: Vec<Block> = Vec::with_capacity(blocks_cnt as usize);
        let mut cumulative_popcnt: u16 = 0;
        for i_block in 0..(blocks_cnt as u64) {
            let remaining = chunk_length as u64 - i_block * block_size as u64;
            let this_block_size = if remaining < block_size as u64 {
                remaining as u8
            } else {
                block_size
            };

            let pos_block_start = pos_chunk_start + i_block * block_size as u64;
            let block_rbv = rbv.copy_sub(pos_block_start, this_block_size as u64);
            cumulative_popcnt += block_rbv.popcount() as u16;

            blocks.push(Block::new(cumulative_popcnt, this_block_size));
        }

        Blocks {
            blocks,
            blocks_cnt,
        }
    }

    /// Returns size of 1 block: _(log N) / 2_.
    pub fn calc_block_size(n: u64) -> u8 {
        let lg2 = (n as f64).log2() as u8;
        let sz = lg2 / 2;
        if sz == 0 {
            1
        } else {
            sz
        }
    }

    /// Returns i-th block in this chunk.
    ///
    /// # Panics
    /// When _`i` >= `self.blocks_cnt`_.
    pub fn access(&self, i: u64) -> &Block {
        assert!(
            i < self.blocks_cnt as u64,
            "i = {} must be smaller than {} (self.blocks_cnt)",
            i,
            self.blocks_cnt
        );
        &self.blocks[i as usize]
    }
}
