//! PredicateMask bit-field behavior across lane widths.
//!
//! Disjointness of predicate fields is the central invariant: merging or
//! clearing one predicate must never disturb another's bit range. The
//! aggregate queries are checked against a direct per-lane scan for every
//! bit pattern of every supported width.

use lanemask::backend::portable::{Mask2, Mask4, Mask8};
use lanemask::{LaneMask, PredicateMask};

lanemask::predicates! {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
}

macro_rules! width_tests {
    ($modname:ident, $mask:ident, $lanes:expr) => {
        mod $modname {
            use super::*;

            fn pattern(f: impl Fn(usize) -> bool) -> $mask {
                let mut lanes = [false; $lanes];
                for (i, lane) in lanes.iter_mut().enumerate() {
                    *lane = f(i);
                }
                $mask(lanes)
            }

            fn field(index: u32) -> u32 {
                (!0u32 >> (32 - $lanes)) << (index * $lanes)
            }

            #[test]
            fn aggregates_match_per_lane_scan() {
                for bits in 0..(1u32 << $lanes) {
                    let lanes = pattern(|i| bits >> i & 1 == 1);
                    let mut mask = PredicateMask::<$mask>::new();
                    mask.merge::<P1>(lanes);

                    let all = bits == !0u32 >> (32 - $lanes);
                    let none = bits == 0;
                    assert_eq!(mask.all_true::<P1>(), all, "pattern {bits:b}");
                    assert_eq!(mask.all_false::<P1>(), none, "pattern {bits:b}");
                    for lane in 0..$lanes {
                        assert_eq!(
                            mask.lane::<P1>(lane),
                            bits >> lane & 1 == 1,
                            "pattern {bits:b} lane {lane}"
                        );
                    }

                    // Untouched predicates stay empty.
                    assert!(mask.all_false::<P0>());
                    assert!(mask.all_false::<P2>());
                    assert!(mask.all_false::<P3>());
                }
            }

            #[test]
            fn lane_mask_any_all_match_per_lane_scan() {
                for bits in 0..(1u32 << $lanes) {
                    let lanes = pattern(|i| bits >> i & 1 == 1);
                    assert_eq!(lanes.any(), bits != 0, "pattern {bits:b}");
                    assert_eq!(
                        lanes.all(),
                        bits == !0u32 >> (32 - $lanes),
                        "pattern {bits:b}"
                    );
                }
            }

            #[test]
            fn merge_leaves_other_fields_untouched() {
                let mut mask = PredicateMask::<$mask>::new();
                mask.merge::<P0>(pattern(|i| i % 2 == 0));
                mask.merge::<P3>(pattern(|_| true));
                let before = mask.bits();

                mask.merge::<P1>(pattern(|i| i % 2 == 1));
                mask.merge::<P2>(pattern(|i| i == 0));

                assert_eq!(mask.bits() & field(0), before & field(0));
                assert_eq!(mask.bits() & field(3), before & field(3));
            }

            #[test]
            fn clear_removes_exactly_one_field() {
                let mut mask = PredicateMask::<$mask>::new();
                mask.set_all::<P0>();
                mask.set_all::<P1>();
                mask.set_all::<P2>();
                mask.set_all::<P3>();

                mask.clear::<P2>();

                assert!(mask.all_true::<P0>());
                assert!(mask.all_true::<P1>());
                assert!(mask.all_false::<P2>());
                assert!(mask.all_true::<P3>());
            }

            #[test]
            fn clear_all_resets_the_word() {
                let mut mask = PredicateMask::<$mask>::new();
                mask.set_all::<P1>();
                mask.merge::<P3>(pattern(|i| i == 0));
                mask.clear_all();
                assert_eq!(mask.bits(), 0);
            }

            #[test]
            fn merge_is_bitwise_or() {
                let mut mask = PredicateMask::<$mask>::new();
                mask.merge::<P1>(pattern(|i| i == 0));
                mask.merge::<P1>(pattern(|i| i == $lanes - 1));
                assert!(mask.lane::<P1>(0));
                assert!(mask.lane::<P1>($lanes - 1));
                for lane in 1..$lanes - 1 {
                    assert!(!mask.lane::<P1>(lane));
                }
            }

            #[test]
            fn layout_places_predicate_fields_contiguously() {
                for index in 0..4u32 {
                    for lane in 0..$lanes {
                        let mut mask = PredicateMask::<$mask>::new();
                        match index {
                            0 => mask.merge::<P0>(pattern(|i| i == lane)),
                            1 => mask.merge::<P1>(pattern(|i| i == lane)),
                            2 => mask.merge::<P2>(pattern(|i| i == lane)),
                            _ => mask.merge::<P3>(pattern(|i| i == lane)),
                        }
                        assert_eq!(
                            mask.bits(),
                            1u32 << (index * $lanes + lane as u32),
                            "predicate {index} lane {lane}"
                        );
                    }
                }
            }
        }
    };
}

width_tests!(two_lanes, Mask2, 2);
width_tests!(four_lanes, Mask4, 4);
width_tests!(eight_lanes, Mask8, 8);
