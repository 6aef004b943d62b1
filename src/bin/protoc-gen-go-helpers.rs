use std::io::{Read, Write};

fn main() {
    env_logger::init();

    if let Err(e) = faillible_main() {
        eprintln!("protoc-gen-go-helpers: {}", e);
        std::process::exit(1);
    }
}

fn faillible_main() -> protoc_gen_go_helpers::Result<()> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;

    let request = protoc_gen_go_helpers::decode_request(&buf)?;
    let response = protoc_gen_go_helpers::run_plugin(request);
    let out = protoc_gen_go_helpers::encode_response(&response)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;

    Ok(())
}
