#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE: &str = "Lions 3, Snakes 3
Tarantulas 1, FC Awesome 0
Lions 1, FC Awesome 1
Tarantulas 3, Snakes 1
Lions 4, Grouches 0
";

pub const SAMPLE_TABLE: &str =
    "1. Tarantulas, 6 pts\n2. Lions, 5 pts\n3. FC Awesome, 1 pt\n3. Snakes, 1 pt\n5. Grouches, 0 pts\n";

pub const TIES: &str = "aa team 1, cb team 0
aa team 2, ca team 0
ab team 1, ca team 0
ab team 1, cb team 0
ba team 2, bb team 0
bb team 3, bc team 1
bc team 2, ba team 1
ca team 0, cb team 0
";

pub const TIES_TABLE: &str = "1. aa team, 6 pts\n1. ab team, 6 pts\n3. ba team, 3 pts\n3. bb team, 3 pts\n3. bc team, 3 pts\n6. ca team, 1 pt\n6. cb team, 1 pt\n";

pub fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
