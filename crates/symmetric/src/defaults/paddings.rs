use crate::options::Options;
use crate::registry::{Padding, RegistryBuilder};
use cipherkit_algorithms::{
    AnsiX923, Iso10126, Iso7816, NoPadding, Pkcs1, Pkcs5, Pkcs7, ZeroPadding,
};
use cipherkit_api::{PaddingScheme, Result};

type Scheme = Box<dyn PaddingScheme>;

/// Factory for a padding with no configuration
fn fixed<P>(scheme: P) -> impl Fn(&Options) -> Result<Scheme> + Send + Sync
where
    P: PaddingScheme + Clone + 'static,
{
    move |_: &Options| Ok(Box::new(scheme.clone()) as Scheme)
}

fn pkcs1(options: &Options) -> Result<Scheme> {
    let block_type = options.config().pkcs1_block_type.unwrap_or_default();
    Ok(Box::new(Pkcs1::new(block_type)))
}

pub(super) fn register(builder: &RegistryBuilder) {
    builder
        .add_padding(Padding::NONE, || "NoPadding".into(), fixed(NoPadding))
        .add_padding(Padding::ZERO, || "Zero".into(), fixed(ZeroPadding))
        .add_padding(Padding::PKCS1, || "PKCS1".into(), pkcs1)
        .add_padding(Padding::PKCS5, || "PKCS5".into(), fixed(Pkcs5))
        .add_padding(Padding::PKCS7, || "PKCS7".into(), fixed(Pkcs7))
        .add_padding(Padding::X923, || "X923".into(), fixed(AnsiX923))
        .add_padding(Padding::ISO10126, || "ISO10126".into(), fixed(Iso10126))
        .add_padding(Padding::ISO7816_4, || "ISO7816-4".into(), fixed(Iso7816));
}
