//! Modes of operation composed over any [`BlockCipher`](super::BlockCipher)

pub mod ctr;
