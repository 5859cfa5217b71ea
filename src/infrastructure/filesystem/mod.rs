pub mod native_bundle_picker;
