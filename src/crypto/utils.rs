use bitvec::prelude::BitVec;

/// MSB-first bit expansion: bit 0 of the result is the most significant
/// bit of `input[0]`, matching the 1-based numbering of the DES tables.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Applies a 1-based permutation table to `data`, producing one output bit
/// per table entry. Table entry `n` selects the `n`-th bit of the input,
/// counting from the most significant bit of the first byte.
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let mut permuted = BitVec::with_capacity(table.len());
    for &pos in table {
        permuted.push(bits[pos - 1]);
    }
    bits_to_bytes(&permuted)
}

pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
