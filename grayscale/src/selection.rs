use crate::config::ConvertConfig;
use crate::converter::{
    BatchVectorConverter, Converter, ConverterKind, LaneDotConverter, PartitionedConverter,
    ScalarConverter,
};
use crate::error::{Error, Result};
use crate::pixel_buffer::PixelBuffer;

/// Builds the converter a config asks for.
///
/// The logic:
/// 1. An explicit kind is built as-is, failing with
///    [`Error::CapabilityUnsupported`] when the CPU cannot run it
/// 2. Otherwise the batch vector converter, if the CPU supports it
/// 3. Otherwise the partitioned reference converter
///
/// `workers` only applies to the partitioned converter.
pub fn select_converter(config: &ConvertConfig) -> Result<Box<dyn Converter>> {
    let kind = match config.converter {
        Some(kind) => {
            if !kind.is_supported() {
                return Err(Error::CapabilityUnsupported {
                    converter: kind,
                    feature: kind.required_feature().unwrap_or("unknown"),
                });
            }
            kind
        }
        None if ConverterKind::BatchVector.is_supported() => ConverterKind::BatchVector,
        None => ConverterKind::Partitioned,
    };

    tracing::debug!(
        converter = %kind,
        requested = config.converter.is_some(),
        "Selected converter"
    );

    Ok(match kind {
        ConverterKind::Scalar => Box::new(ScalarConverter::new()),
        ConverterKind::Partitioned => match config.workers {
            Some(workers) => Box::new(PartitionedConverter::with_workers(workers)?),
            None => Box::new(PartitionedConverter::new()),
        },
        ConverterKind::LaneDot => Box::new(LaneDotConverter::new()),
        ConverterKind::BatchVector => Box::new(BatchVectorConverter::new()),
    })
}

/// Select a converter for `config` and run it on `pixels`.
pub fn convert(pixels: &PixelBuffer, config: &ConvertConfig) -> Result<PixelBuffer> {
    select_converter(config)?.convert(pixels)
}
