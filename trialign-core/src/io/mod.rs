pub mod fasta;

pub use fasta::{
    read_sequence_triple_from_bytes, read_sequence_triple_from_path,
    read_sequence_triple_from_reader, FastaRecord, SequenceTriple,
};
