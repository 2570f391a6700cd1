fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the object-storage proto shipped with this crate
    let proto_file = "proto/storage.proto";

    // Tell cargo to recompile if the proto file changes
    println!("cargo:rerun-if-changed={}", proto_file);

    // Use the vendored protoc binary so the build does not depend on a
    // system-installed protobuf compiler.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(false) // We only need the client
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
