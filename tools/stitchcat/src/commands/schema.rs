use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use logstitch::core::format_schema;
use logstitch_protobuf::protobuf_descriptor_to_schema;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to a serialized FileDescriptorSet (protoc --descriptor_set_out)
    #[arg(short, long)]
    descriptor: PathBuf,

    /// Fully-qualified protobuf message name
    #[arg(short, long)]
    message: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let schema_data = fs::read(&self.descriptor)
            .with_context(|| format!("reading descriptor set {}", self.descriptor.display()))?;
        let schema = protobuf_descriptor_to_schema(&self.message, &schema_data)?;
        let text = format_schema(&schema)?;

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
