mod catalogue_source;

pub use catalogue_source::CatalogueSource;
