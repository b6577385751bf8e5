fn main() -> Result<(), Box<dyn std::error::Error>> {
    workbench::cli::main()
}
