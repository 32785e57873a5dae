use crate::FetchError;

/// A single downloadable asset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Name used to request the asset.
    pub name: &'static str,
    pub url: &'static str,
    /// Name of the file inside the data folder.
    pub file_name: &'static str,
}

/// Every asset the samples know how to fetch.
pub const CATALOG: &[AssetEntry] = &[
    AssetEntry {
        name: "eiffel-tower-hdr",
        url: "https://www.dropbox.com/s/u13zuwdxy0fpgzc/little_paris_eiffel_tower_4k.hdr?dl=1",
        file_name: "little_paris_eiffel_tower_4k.hdr",
    },
    AssetEntry {
        name: "uv-normal-sphere",
        url: "https://www.dropbox.com/scl/fi/7ezrw19c2kr2srvyn6qxj/uvNormalSphere.obj?rlkey=vual09zy4zsjvlhabx4nhbuy1&dl=1",
        file_name: "uvNormalSphere.obj",
    },
    AssetEntry {
        name: "output-skybox-hdr",
        url: "https://www.dropbox.com/scl/fi/lnm3vgr3plmily1qkvtwp/output_skybox.hdr?rlkey=k3a5gerogb9pyje6cfnj0tqtn&dl=1",
        file_name: "output_skybox.hdr",
    },
];

pub fn find(name: &str) -> Result<&'static AssetEntry, FetchError> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| FetchError::UnknownAsset(name.into()))
}
