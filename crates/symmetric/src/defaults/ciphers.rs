use crate::options::Options;
use crate::registry::{Multiple, MultipleEntry, RegistryBuilder};
use cipherkit_algorithms::{Aes, ChaCha20, Des, Kuznyechik, Magma, Rc4, Sm4, TripleDes};
use cipherkit_api::{BlockCipher, KeyInit, Result, StreamCipher};

/// Config extra holding the initial ChaCha20 block counter
pub(crate) const CHACHA20_COUNTER: &str = "counter";

fn keyed<C>(options: &Options) -> Result<Box<dyn BlockCipher>>
where
    C: BlockCipher + KeyInit + 'static,
{
    Ok(Box::new(C::new(options.key())?))
}

fn chacha20(options: &Options) -> Result<Box<dyn StreamCipher>> {
    let counter = options.config().extra_u32(CHACHA20_COUNTER)?.unwrap_or(0);
    let nonce = options.iv().unwrap_or_default();
    Ok(Box::new(ChaCha20::new(options.key(), nonce, counter)?))
}

fn rc4(options: &Options) -> Result<Box<dyn StreamCipher>> {
    Ok(Box::new(Rc4::new(options.key())?))
}

pub(super) fn register(builder: &RegistryBuilder) {
    builder
        .add_multiple(Multiple::AES, || "AES".into(), MultipleEntry::block(keyed::<Aes>))
        .add_multiple(
            Multiple::KUZNYECHIK,
            || "Kuznyechik".into(),
            MultipleEntry::block(keyed::<Kuznyechik>),
        )
        .add_multiple(Multiple::MAGMA, || "Magma".into(), MultipleEntry::block(keyed::<Magma>))
        .add_multiple(Multiple::SM4, || "SM4".into(), MultipleEntry::block(keyed::<Sm4>))
        .add_multiple(Multiple::DES, || "DES".into(), MultipleEntry::block(keyed::<Des>))
        .add_multiple(
            Multiple::TRIPLE_DES,
            || "TripleDES".into(),
            MultipleEntry::block(keyed::<TripleDes>),
        )
        .add_multiple(Multiple::CHACHA20, || "ChaCha20".into(), MultipleEntry::stream(chacha20))
        .add_multiple(Multiple::RC4, || "RC4".into(), MultipleEntry::stream(rc4));
}
