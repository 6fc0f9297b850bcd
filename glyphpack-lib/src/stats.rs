use std::collections::BTreeMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChunkKind {
    Direct,
    Repeat,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub data_lines: usize,
    pub comment_lines: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub chunks: BTreeMap<ChunkKind, usize>,
}
