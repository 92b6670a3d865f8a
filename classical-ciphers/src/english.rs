//! Built-in English reference tables.
//!
//! Letter weights are the widely used percentages from Lewand's
//! *Cryptological Mathematics*. Digraph weights were counted over a corpus
//! of ordinary English prose and are expressed as percentages of all
//! adjacent letter pairs; pairs the corpus never produced are zero. The
//! attacks only compare weights against each other, so tables from other
//! sources (or other languages) can be substituted without rescaling.

use crate::alphabet::ALPHABET_LEN;

/// Relative frequency of each letter a-z in English text, in percent.
pub const LETTER_WEIGHTS: [f64; ALPHABET_LEN] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094,
    6.966, 0.153, 0.772, 4.025, 2.406, 6.749, 7.507, 1.929,
    0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.36, 0.15,
    1.974, 0.074,
];

/// Relative frequency of each ordered letter pair in English text, in
/// percent of all adjacent pairs. Row index is the first letter of the
/// pair, column index the second, both in canonical a-z order.
#[rustfmt::skip]
pub const DIGRAPH_WEIGHTS: [[f64; ALPHABET_LEN]; ALPHABET_LEN] = [
    // a?
    [
        0.0162, 0.2914, 0.6313, 0.3885, 0.0, 0.0971, 0.437, 0.0162, 0.3075, 0.0162,
        0.1295, 0.4856, 0.437, 1.9586, 0.0, 0.2104, 0.0162, 0.9064, 0.4208, 1.1978,
        0.1133, 0.0647, 0.0486, 0.0162, 0.2104, 0.0162,
    ],
    // b?
    [
        0.0971, 0.0, 0.0, 0.0, 0.518, 0.0, 0.0, 0.0, 0.0324, 0.0162,
        0.0, 0.259, 0.0, 0.0, 0.1942, 0.0, 0.0, 0.0647, 0.0162, 0.0,
        0.1781, 0.0, 0.0, 0.0, 0.1781, 0.0,
    ],
    // c?
    [
        0.437, 0.0, 0.0324, 0.0, 0.3885, 0.0162, 0.0, 0.3075, 0.1942, 0.0,
        0.259, 0.0647, 0.0, 0.0, 0.7446, 0.0, 0.0, 0.2428, 0.0162, 0.1781,
        0.0486, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // d?
    [
        0.3399, 0.1133, 0.0809, 0.0971, 0.6636, 0.0647, 0.0486, 0.0809, 0.437, 0.0162,
        0.0324, 0.0809, 0.0486, 0.1133, 0.3237, 0.0162, 0.0162, 0.0162, 0.1942, 0.4856,
        0.0486, 0.0324, 0.1133, 0.0162, 0.0324, 0.0486,
    ],
    // e?
    [
        1.2787, 0.2914, 0.8093, 0.5503, 0.3399, 0.1781, 0.1457, 0.0647, 0.3723, 0.0162,
        0.0809, 0.6313, 0.5018, 1.2302, 0.3561, 0.2914, 0.0486, 2.3956, 1.5701, 1.473,
        0.0324, 0.3723, 0.4208, 0.259, 0.2914, 0.0,
    ],
    // f?
    [
        0.2104, 0.0486, 0.0324, 0.0, 0.0809, 0.0647, 0.0, 0.0162, 0.1457, 0.0,
        0.0, 0.1133, 0.0, 0.0162, 0.3561, 0.0486, 0.0, 0.1619, 0.0486, 0.4047,
        0.0647, 0.0, 0.0324, 0.0, 0.0, 0.0,
    ],
    // g?
    [
        0.1942, 0.0486, 0.0, 0.0, 0.518, 0.0162, 0.0, 0.2428, 0.1619, 0.0,
        0.0162, 0.1619, 0.0647, 0.0486, 0.0162, 0.0324, 0.0, 0.1619, 0.1133, 0.1619,
        0.1133, 0.0, 0.0324, 0.0, 0.0, 0.0,
    ],
    // h?
    [
        0.9064, 0.0486, 0.0, 0.0, 2.9298, 0.0324, 0.0, 0.0162, 0.5503, 0.0,
        0.0162, 0.0324, 0.0162, 0.0486, 0.5989, 0.0, 0.0, 0.0486, 0.0, 0.2266,
        0.0324, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // i?
    [
        0.0486, 0.0324, 0.2266, 0.3561, 0.2266, 0.1133, 0.1457, 0.0, 0.0, 0.0,
        0.0647, 0.259, 0.1133, 1.4892, 0.1781, 0.1457, 0.0162, 0.2428, 0.8579, 0.8093,
        0.0, 0.2104, 0.0, 0.0162, 0.0, 0.0324,
    ],
    // j?
    [
        0.0486, 0.0, 0.0, 0.0, 0.0162, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.1295, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // k?
    [
        0.0324, 0.0162, 0.0, 0.0162, 0.3723, 0.0, 0.0, 0.0162, 0.1133, 0.0,
        0.0, 0.0162, 0.0162, 0.0324, 0.0, 0.0, 0.0162, 0.0, 0.0486, 0.0809,
        0.0, 0.0, 0.0324, 0.0, 0.0, 0.0,
    ],
    // l?
    [
        0.3237, 0.0324, 0.0162, 0.2104, 1.0845, 0.0647, 0.0, 0.0, 0.3561, 0.0,
        0.0162, 0.3075, 0.0647, 0.0, 0.3075, 0.0486, 0.0162, 0.0, 0.1133, 0.1133,
        0.1619, 0.0162, 0.0324, 0.0, 0.3075, 0.0,
    ],
    // m?
    [
        0.3237, 0.1295, 0.0, 0.0, 0.6798, 0.0, 0.0, 0.0324, 0.2104, 0.0,
        0.0, 0.0, 0.0486, 0.1457, 0.2914, 0.2266, 0.0, 0.0, 0.0647, 0.0324,
        0.0647, 0.0, 0.0162, 0.0, 0.0324, 0.0162,
    ],
    // n?
    [
        0.7446, 0.0809, 0.2428, 1.214, 0.5665, 0.0486, 1.0036, 0.0486, 0.1295, 0.0324,
        0.0, 0.0971, 0.0486, 0.1133, 0.5827, 0.0162, 0.0, 0.0486, 0.4856, 1.0036,
        0.0971, 0.0486, 0.0971, 0.0162, 0.0809, 0.0,
    ],
    // o?
    [
        0.0647, 0.0647, 0.0647, 0.1619, 0.0486, 0.7446, 0.0809, 0.0486, 0.0971, 0.0,
        0.0809, 0.3237, 0.2752, 0.955, 0.1457, 0.1295, 0.0324, 1.1169, 0.3561, 0.518,
        0.6798, 0.1133, 0.5018, 0.0486, 0.0, 0.0324,
    ],
    // p?
    [
        0.3723, 0.0, 0.0, 0.0, 0.1942, 0.0, 0.0, 0.1781, 0.0486, 0.0,
        0.0, 0.2104, 0.0, 0.0162, 0.1133, 0.0647, 0.0162, 0.1942, 0.0486, 0.1942,
        0.1133, 0.0, 0.0162, 0.0, 0.0, 0.0,
    ],
    // q?
    [
        0.0324, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.1619, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // r?
    [
        0.5827, 0.0486, 0.1133, 0.3399, 1.5863, 0.0971, 0.0809, 0.0324, 0.4694, 0.0162,
        0.0324, 0.0647, 0.1295, 0.1781, 0.6798, 0.0647, 0.0, 0.2752, 0.696, 0.5018,
        0.1133, 0.0647, 0.1295, 0.0, 0.4532, 0.0,
    ],
    // s?
    [
        0.9388, 0.0324, 0.3075, 0.0324, 1.0197, 0.1295, 0.0324, 0.2428, 0.5989, 0.0324,
        0.0486, 0.1133, 0.0809, 0.0971, 0.5665, 0.1457, 0.0, 0.0809, 0.4856, 1.2302,
        0.0971, 0.0324, 0.3237, 0.0, 0.0486, 0.0162,
    ],
    // t?
    [
        0.7446, 0.1619, 0.1619, 0.0647, 1.4406, 0.0647, 0.0, 3.7067, 0.6475, 0.0324,
        0.0324, 0.1133, 0.0647, 0.0647, 0.6475, 0.0486, 0.0, 0.3075, 0.5827, 1.1331,
        0.2104, 0.0, 0.1942, 0.0, 0.1295, 0.0324,
    ],
    // u?
    [
        0.1295, 0.0162, 0.0647, 0.0971, 0.0647, 0.0162, 0.1295, 0.0, 0.1781, 0.0,
        0.0, 0.1619, 0.3399, 0.2752, 0.0162, 0.0971, 0.0, 0.2914, 0.2428, 0.3399,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0162,
    ],
    // v?
    [
        0.0486, 0.0, 0.0, 0.0, 0.7608, 0.0, 0.0, 0.0, 0.0971, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0809, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    // w?
    [
        0.259, 0.0, 0.0162, 0.0162, 0.3885, 0.0, 0.0, 0.4694, 0.3075, 0.0,
        0.0, 0.0162, 0.0, 0.0647, 0.259, 0.0324, 0.0, 0.1619, 0.1295, 0.0162,
        0.0, 0.0162, 0.0, 0.0, 0.0, 0.0,
    ],
    // x?
    [
        0.0647, 0.0, 0.0, 0.0, 0.0162, 0.0, 0.0, 0.0, 0.0486, 0.0162,
        0.0, 0.0, 0.0, 0.0, 0.0324, 0.0, 0.0, 0.0, 0.0, 0.1781,
        0.0, 0.0, 0.0162, 0.0, 0.0, 0.0,
    ],
    // y?
    [
        0.1457, 0.0809, 0.1295, 0.0162, 0.0324, 0.0971, 0.0, 0.0, 0.0809, 0.0,
        0.0, 0.0647, 0.0647, 0.0, 0.1781, 0.1619, 0.0162, 0.0324, 0.2428, 0.2914,
        0.0, 0.0162, 0.1295, 0.0, 0.0, 0.0,
    ],
    // z?
    [
        0.0486, 0.0162, 0.0, 0.0, 0.0647, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0162, 0.0, 0.0, 0.0162, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0162, 0.0, 0.0162, 0.0, 0.0162, 0.0162,
    ],
];
