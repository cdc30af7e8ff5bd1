// Code generated by tidal. DO NOT EDIT.
// source: migrations

/// Package the embedded migrations belong to.
pub const PACKAGE: &str = "accounts";

/// Registers every embedded migration, in revision order.
///
/// # Errors
/// Fails on malformed data or a revision that is already registered.
pub fn register(registry: &mut tidal::Registry) -> Result<(), tidal::TidalError> {
    registry.register_descriptor(tidal::Revision::new(1), REVISION_1)?;
    registry.register_descriptor(tidal::Revision::new(2), REVISION_2)?;
    Ok(())
}

// create_users
static REVISION_1: &[u8] = &[
	// 136 bytes of compressed descriptor data
	0x1f, 0x8b, 0x08, 0x08, 0x00, 0xb9, 0x55, 0x69, 0x02, 0xff, 0x30, 0x30, 0x30, 0x31, 0x5f, 0x63,
	0x72, 0x65, 0x61, 0x74, 0x65, 0x5f, 0x75, 0x73, 0x65, 0x72, 0x73, 0x2e, 0x73, 0x71, 0x6c, 0x00,
	0xd3, 0xd5, 0x55, 0x28, 0x48, 0x4c, 0xce, 0x4e, 0x4c, 0x4f, 0xb5, 0x52, 0x48, 0x4c, 0x4e, 0xce,
	0x2f, 0xcd, 0x2b, 0x29, 0xe6, 0xd2, 0xd5, 0x55, 0xc8, 0xcd, 0x4c, 0x2f, 0x4a, 0x2c, 0x01, 0x0a,
	0x96, 0x16, 0x70, 0x39, 0x07, 0xb9, 0x3a, 0x86, 0xb8, 0x2a, 0x84, 0x38, 0x3a, 0xf9, 0xb8, 0x2a,
	0x94, 0x16, 0xa7, 0x16, 0x15, 0x2b, 0x68, 0x64, 0xa6, 0x28, 0x64, 0xe6, 0x95, 0xa4, 0xa6, 0xa7,
	0x16, 0x29, 0x04, 0x04, 0x79, 0xfa, 0x3a, 0x06, 0x45, 0x2a, 0x78, 0xbb, 0x46, 0x6a, 0x5a, 0xa3,
	0xe8, 0x4d, 0xc9, 0x2f, 0xcf, 0xe3, 0x72, 0x09, 0xf2, 0x0f, 0x40, 0xd6, 0x6b, 0xcd, 0x05, 0x00,
	0x02, 0x74, 0x15, 0xfb, 0x74, 0x00, 0x00, 0x00,
];

// create_groups
static REVISION_2: &[u8] = &[
	// 125 bytes of compressed descriptor data
	0x1f, 0x8b, 0x08, 0x08, 0x3c, 0xb9, 0x55, 0x69, 0x02, 0xff, 0x30, 0x30, 0x30, 0x32, 0x5f, 0x63,
	0x72, 0x65, 0x61, 0x74, 0x65, 0x5f, 0x67, 0x72, 0x6f, 0x75, 0x70, 0x73, 0x2e, 0x73, 0x71, 0x6c,
	0x00, 0xd3, 0xd5, 0x55, 0xc8, 0xcd, 0x4c, 0x2f, 0x4a, 0x2c, 0x49, 0xb5, 0x52, 0x28, 0x2d, 0xe0,
	0x72, 0x0e, 0x72, 0x75, 0x0c, 0x71, 0x55, 0x08, 0x71, 0x74, 0xf2, 0x71, 0x55, 0x48, 0x2f, 0xca,
	0x2f, 0x2d, 0x28, 0x56, 0xd0, 0xc8, 0x4c, 0x51, 0xc8, 0xcc, 0x2b, 0x49, 0x4d, 0x4f, 0x2d, 0x52,
	0x08, 0x08, 0xf2, 0xf4, 0x75, 0x0c, 0x8a, 0x54, 0xf0, 0x76, 0x8d, 0xd4, 0xb4, 0xe6, 0xd2, 0x45,
	0xd2, 0x9c, 0x9a, 0x97, 0x82, 0xc2, 0x4f, 0xc9, 0x2f, 0xcf, 0xe3, 0x72, 0x09, 0xf2, 0x0f, 0x40,
	0x31, 0xcc, 0x9a, 0x0b, 0x00, 0x6a, 0x9a, 0x07, 0xb0, 0x71, 0x00, 0x00, 0x00,
];
