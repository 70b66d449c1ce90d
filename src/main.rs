fn main() {
    readme_install::app::cli::run();
}
