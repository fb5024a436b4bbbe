pub mod head_tail;

pub use head_tail::{get_head, get_tail, parse_head_tail_args, process_head_tail_files, HeadTailOptions};
