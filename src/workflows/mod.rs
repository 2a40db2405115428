pub mod linker;
