pub mod cheer;
