// Fixed local-action content for the action center's "local" tab

pub struct LocalOrganization {
    pub name: &'static str,
    pub focus: &'static str,
    pub distance: &'static str,
    pub website: &'static str,
}

pub const LOCAL_ORGANIZATIONS: [LocalOrganization; 3] = [
    LocalOrganization {
        name: "Irvine Ranch Conservancy",
        focus: "Habitat Restoration",
        distance: "2.3 miles",
        website: "https://irvineopenspace.org",
    },
    LocalOrganization {
        name: "Sea & Sage Audubon",
        focus: "Bird Conservation",
        distance: "4.1 miles",
        website: "https://www.seaandsageaudubon.org",
    },
    LocalOrganization {
        name: "Orange County Coastkeeper",
        focus: "Marine Protection",
        distance: "8.7 miles",
        website: "https://www.coastkeeper.org",
    },
];

/// Action counters shown in the header. Not tracked; always these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserActionStats {
    pub petitions_signed: u32,
    pub organizations_connected: u32,
    pub cases_explored: u32,
    pub solutions_compared: u32,
}

pub const USER_ACTION_STATS: UserActionStats = UserActionStats {
    petitions_signed: 7,
    organizations_connected: 3,
    cases_explored: 12,
    solutions_compared: 24,
};
