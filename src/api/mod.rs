pub mod index;
pub mod label;
pub mod palettes;
pub mod predict;

pub use index::{handle_index, IndexResponse, __path_handle_index};
pub use label::{handle_label, label_colors, LabelRequest, LabelResponse, __path_handle_label};
pub use palettes::{
    handle_palette, handle_refresh_xkcd, PaletteColor, PaletteRefreshResponse, PaletteResponse,
    __path_handle_palette, __path_handle_refresh_xkcd,
};
pub use predict::{
    handle_predict, handle_predict_upload, resolve_params, CentroidResponse, PredictMeta,
    PredictQuery, PredictResponse, __path_handle_predict, __path_handle_predict_upload,
};
