#![cfg(test)]

mod flood;
