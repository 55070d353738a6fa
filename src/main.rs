use std::path::PathBuf;

use clap::Parser;

use objstream::vulkan::VertexLayout;
use objstream::{AssetDirectory, ErrorPolicy, ObjError, Object};

/// Parse an OBJ asset and build its interleaved vertex stream.
#[derive(Parser, Debug)]
#[command(name = "objstream", version)]
struct Args {
    /// Resource name, resolved as `<assets>/<name>.<extension>`
    name: String,

    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    #[arg(long, default_value = "obj")]
    extension: String,

    /// Build this mesh instead of the first one
    #[arg(long)]
    mesh: Option<usize>,

    /// Panic on the first error instead of reporting it
    #[arg(long)]
    fail_fast: bool,

    /// Write the packed stream bytes to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), ObjError> {
    let policy = match args.fail_fast {
        true => ErrorPolicy::Abort,
        false => ErrorPolicy::Recover,
    };

    let assets = AssetDirectory::new(&args.assets).with_extension(&args.extension);
    let object = Object::load(&assets, &args.name, policy)?;

    for (i, mesh) in object.meshes.iter().enumerate() {
        log::info!(
            "mesh {} `{}`: {} indices, {:?}",
            i,
            mesh.material,
            mesh.index_count,
            mesh.format()
        );
    }

    let stream = match args.mesh {
        Some(index) => policy.apply(object.array_data_for(index))?,
        None => policy.apply(object.array_data())?,
    };
    let layout = policy.apply(VertexLayout::for_format(stream.format))?;

    log::info!(
        "{} vertices, {} points, {} bytes, stride {}",
        stream.vertex_count(),
        stream.points.len(),
        stream.byte_len(),
        layout.binding.stride
    );

    if let Some(path) = &args.output {
        std::fs::write(path, stream.as_bytes())
            .map_err(|e| ObjError::upload(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("wrote {}", path.display());
    }

    return Ok(());
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
