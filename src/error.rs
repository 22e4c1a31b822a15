error_chain! {
    errors {
        FileIO(path: String) {
            description("Failed to perform file IO")
                display("Failed to read {}", path)
        }
        Digest(reason: String) {
            description("Failed to compute digest")
                display("Failed to compute digest: {}", reason)
        }
    }
}
