fn main() {
    seoscope::cli::run();
}
