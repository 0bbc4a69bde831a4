use org_folders_protocol::{Folder, OrgId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use crate::error::Result;
use crate::source::FolderSource;

/// Organization that always owns part of a generated dataset.
pub const DEFAULT_ORG_ID: OrgId = Uuid::from_u128(0xc155_6e17_b7c0_45a3_a6ae_9546_248f_b17a);

pub const DEFAULT_SAMPLE_FOLDERS: usize = 1_000;
pub const DEFAULT_SAMPLE_ORGS: usize = 5;

const DELETED_RATIO: f64 = 0.1;

const WORDS: &[&str] = &[
    "amber", "atlas", "birch", "cobalt", "delta", "ember", "fjord", "garnet", "harbor", "indigo",
    "juniper", "kelp", "lumen", "maple", "nimbus", "onyx", "pioneer", "quartz", "raven", "sierra",
    "tundra", "umber", "vertex", "willow", "xenon", "yarrow", "zephyr",
];

/// Generated dataset. Identical settings (seed included) produce identical folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleData {
    pub folders: usize,
    pub orgs: usize,
    pub seed: u64,
}

impl Default for SampleData {
    fn default() -> Self {
        Self {
            folders: DEFAULT_SAMPLE_FOLDERS,
            orgs: DEFAULT_SAMPLE_ORGS,
            seed: 0,
        }
    }
}

impl SampleData {
    pub fn generate(&self) -> Vec<Folder> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut orgs = Vec::with_capacity(self.orgs.max(1));
        orgs.push(DEFAULT_ORG_ID);
        while orgs.len() < self.orgs {
            orgs.push(random_uuid(&mut rng));
        }

        (0..self.folders)
            .map(|_| {
                let id = random_uuid(&mut rng);
                let org_id = *orgs.choose(&mut rng).unwrap_or(&DEFAULT_ORG_ID);
                let first = WORDS.choose(&mut rng).copied().unwrap_or("folder");
                let second = WORDS.choose(&mut rng).copied().unwrap_or("folder");
                Folder {
                    id,
                    name: format!("{first}-{second}"),
                    org_id,
                    deleted: rng.gen_bool(DELETED_RATIO),
                }
            })
            .collect()
    }
}

impl FolderSource for SampleData {
    fn load(&self) -> Result<Vec<Folder>> {
        let folders = self.generate();
        log::debug!(
            "Generated {} sample folders across {} orgs (seed {})",
            folders.len(),
            self.orgs.max(1),
            self.seed
        );
        Ok(folders)
    }
}

fn random_uuid(rng: &mut StdRng) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
