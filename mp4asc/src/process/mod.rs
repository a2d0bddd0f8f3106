/// Decoder mode selection.
///
/// Provides [`SourceFormat`](format::SourceFormat), which maps parsed
/// SBR/PS signalling to an [`AacProfile`](format::AacProfile) and the output
/// buffer sizing that goes with it.
pub mod format;

/// ES descriptor wrapping.
///
/// Provides [`build_es_descriptor`](esds::build_es_descriptor) for decoders
/// that expect a full `ES_Descriptor` instead of bare extradata.
pub mod esds;
