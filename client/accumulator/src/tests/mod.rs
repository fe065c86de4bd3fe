#![cfg(test)]

mod utils;
