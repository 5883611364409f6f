fn main() {
    hu_equity::cli::run();
}
