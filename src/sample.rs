//! Small dataset used by the `treeview` binary when no input file is given
use gosub_treeview::Record;

const SAMPLE: &[(i64, &str, i64)] = &[
    (1, "Item 1", 0),
    (2, "Item 1.1", 1),
    (3, "Item 1.2", 1),
    (4, "Item 1.2.1", 3),
    (5, "Item 1.2.2", 3),
    (6, "Item 1.2.3", 3),
    (7, "Item 2", 0),
    (8, "Item 3", 0),
    (9, "Item 3.1", 8),
    (10, "Item 3.2", 8),
    (11, "Item 3.3", 8),
    (12, "Item 3.3.1", 11),
    (13, "Item 3.3.1.1", 12),
    (14, "Item 3.3.1.2", 12),
    (15, "Item 3.3.1.3", 12),
    (16, "Item 3.3.2", 11),
    (17, "Item 4", 0),
    (18, "Item 5", 0),
    (19, "Item 5.1", 18),
];

/// Returns the sample records: five top-level items, nested up to four levels deep
pub fn sample_records() -> Vec<Record> {
    SAMPLE.iter().map(|&record| Record::from(record)).collect()
}
