//! Shared pure helpers.

pub mod city_normalizer;
