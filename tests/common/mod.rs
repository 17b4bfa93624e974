// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared sample text for the cracking integration tests.

/// 258 letters of ordinary English. Long enough that its letter
/// distribution is statistically distinguishable: chi-square ≈ 31.4,
/// comfortably under the good-enough threshold.
pub const ENGLISH_SAMPLE: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG AND THEN RUNS AWAY INTO THE FOREST WHERE IT FINDS A QUIET PLACE TO REST FOR THE NIGHT WHILE THE OTHER ANIMALS OF THE WOODLAND GATHER NEAR THE RIVER TO DRINK AND TO SHARE THE NEWS OF THE DAY AS THE SUN SETS SLOWLY BEHIND THE DISTANT HILLS AND THE EVENING AIR GROWS COOL AND STILL";
