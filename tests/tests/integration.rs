//! Cross-crate scenarios: generated material, encodings, plugins and
//! concurrent use of a shared registry

use cipherkit_algorithms::{Cbc, Ofb};
use cipherkit_api::{BlockCipher, BlockMode, Error, Result, StreamCipher};
use cipherkit_symmetric::{
    default_registry, generate_iv, generate_key, Crypto, Engine, Mode, ModeInstance, Multiple,
    MultipleEntry, Options, Padding, RegistryBuilder, Selection,
};
use std::sync::Arc;
use std::thread;

/// Toy 4-byte block cipher: XOR with the key, then rotate
struct XorRotate {
    key: [u8; 4],
}

impl BlockCipher for XorRotate {
    fn name(&self) -> &'static str {
        "XorRotate"
    }

    fn block_size(&self) -> usize {
        4
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        for (b, k) in block.iter_mut().zip(self.key) {
            *b ^= k;
        }
        block.rotate_left(1);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        block.rotate_right(1);
        for (b, k) in block.iter_mut().zip(self.key) {
            *b ^= k;
        }
        Ok(())
    }
}

fn xor_rotate(options: &Options) -> Result<Box<dyn BlockCipher>> {
    let key: [u8; 4] = options.key().try_into().map_err(|_| Error::InvalidKeySize {
        algorithm: "XorRotate",
        actual: options.key().len(),
    })?;
    Ok(Box::new(XorRotate { key }))
}

/// Keystream of a repeated byte
struct Constant(u8);

impl StreamCipher for Constant {
    fn name(&self) -> &'static str {
        "Constant"
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        data.iter_mut().for_each(|b| *b ^= self.0);
        Ok(())
    }
}

#[test]
fn test_generated_material_roundtrip() {
    let key = generate_key(32).unwrap();
    let iv = generate_iv(16).unwrap();
    let sealed = Crypto::from_string("generated key and IV")
        .with_key(&key)
        .with_iv(&iv)
        .kuznyechik()
        .gost_cbc()
        .encrypt();
    assert!(sealed.is_ok(), "{:?}", sealed.error());

    let opened = Crypto::from_base64_string(&sealed.to_base64_string())
        .with_key_hex(&hex::encode(key.as_slice()))
        .with_iv_hex(&hex::encode(&iv))
        .kuznyechik()
        .gost_cbc()
        .decrypt();
    assert_eq!(opened.to_string(), "generated key and IV");
}

#[test]
fn test_builder_matches_engine() {
    let options = Options::new(b"0123456789abcdef").with_iv(b"fedcba9876543210");
    let selection = Selection::new(Multiple::SM4)
        .with_mode(Mode::OFB)
        .with_padding(Padding::X923);
    let direct = Engine::default()
        .encrypt(&selection, b"same bytes either way", &options)
        .unwrap();

    let built = Crypto::from_string("same bytes either way")
        .with_options(options)
        .sm4()
        .ofb()
        .x923_padding()
        .encrypt();
    assert_eq!(built.as_bytes(), &direct[..]);
}

#[test]
fn test_family_defaults_apply() {
    let key = b"0123456789abcdef";
    let implicit = Crypto::from_string("defaults").with_key(key).aes().encrypt();
    let explicit = Crypto::from_string("defaults")
        .with_key(key)
        .aes()
        .ecb()
        .pkcs7_padding()
        .encrypt();
    assert_eq!(implicit.as_bytes(), explicit.as_bytes());
}

#[test]
fn test_plugin_cipher_uses_builtin_modes() {
    let toy = Multiple::generate();
    let registry = Arc::new(default_registry().with_overrides(|builder| {
        builder.add_multiple(
            toy,
            || "XorRotate".into(),
            MultipleEntry::block(xor_rotate).with_defaults(Mode::CBC, Padding::ISO7816_4),
        );
    }));
    assert_eq!(registry.find_multiple_by_name("xorrotate"), Some(toy));

    for mode in [None, Some(Mode::CTR), Some(Mode::OFB), Some(Mode::CFB8)] {
        let mut crypto = Crypto::from_string("plugin block cipher")
            .with_key([1u8, 2, 3, 4])
            .with_iv([9u8; 4])
            .with_registry(Arc::clone(&registry))
            .multiple(toy);
        if let Some(mode) = mode {
            crypto = crypto.mode(mode);
        }
        let sealed = crypto.encrypt();
        assert!(sealed.is_ok(), "{:?}: {:?}", mode, sealed.error());

        let opened = Crypto::from_bytes(sealed.as_bytes())
            .with_options(crypto.options().clone())
            .with_registry(Arc::clone(&registry))
            .multiple(toy);
        let opened = match mode {
            Some(mode) => opened.mode(mode),
            None => opened,
        };
        assert_eq!(opened.decrypt().to_string(), "plugin block cipher", "{:?}", mode);
    }

    let eax = Crypto::from_string("x")
        .with_key([1u8, 2, 3, 4])
        .with_iv([9u8; 4])
        .with_registry(Arc::clone(&registry))
        .multiple(toy)
        .eax()
        .encrypt();
    assert!(matches!(eax.error(), Some(Error::InvalidParameter { .. })));

    let out = Crypto::from_string("x")
        .with_key([1u8; 5])
        .with_registry(registry)
        .multiple(toy)
        .encrypt();
    assert_eq!(
        out.error(),
        Some(&Error::InvalidKeySize {
            algorithm: "XorRotate",
            actual: 5
        })
    );
}

#[test]
fn test_plugin_cbc_default_matches_direct_mode() {
    let toy = Multiple::generate();
    let registry = Arc::new(RegistryBuilder::with_defaults().build().with_overrides(|builder| {
        builder.add_multiple(
            toy,
            || "XorRotate".into(),
            MultipleEntry::block(xor_rotate).with_defaults(Mode::CBC, Padding::NONE),
        );
    }));
    let sealed = Engine::new(registry)
        .encrypt(
            &Selection::new(toy),
            b"eight by",
            &Options::new([5u8, 6, 7, 8]).with_iv([1u8, 1, 1, 1]),
        )
        .unwrap();

    let direct = Cbc::new(XorRotate { key: [5, 6, 7, 8] }, &[1, 1, 1, 1])
        .and_then(|cbc| cbc.encrypt(b"eight by"))
        .unwrap();
    assert_eq!(sealed, direct);
}

#[test]
fn test_plugin_stream_cipher_and_mode() {
    let constant = Multiple::generate();
    let ofb_alias = Mode::generate();
    let registry = Arc::new(default_registry().with_overrides(|builder| {
        builder
            .add_multiple(
                constant,
                || "Constant".into(),
                MultipleEntry::stream(|options: &Options| {
                    let byte = options.key().first().copied().unwrap_or(0);
                    Ok(Box::new(Constant(byte)) as Box<dyn StreamCipher>)
                }),
            )
            .add_mode(ofb_alias, || "OFB-ALIAS".into(), |cipher, options: &Options| {
                let iv = options.iv().unwrap_or_default();
                Ok(ModeInstance::Stream(Box::new(Ofb::new(cipher, iv)?)))
            });
    }));

    let engine = Engine::new(Arc::clone(&registry));
    let sealed = engine
        .encrypt(
            &Selection::new(constant).with_mode(Mode::CBC).with_padding(Padding::PKCS7),
            b"abc",
            &Options::new([0x20u8]),
        )
        .unwrap();
    assert_eq!(sealed, b"ABC");

    let options = Options::new(b"0123456789abcdef").with_iv(b"0123456789abcdef");
    let via_alias = engine
        .encrypt(
            &Selection::new(Multiple::AES).with_mode(ofb_alias).with_padding(Padding::NONE),
            b"not block aligned",
            &options,
        )
        .unwrap();
    let via_builtin = engine
        .encrypt(
            &Selection::new(Multiple::AES).with_mode(Mode::OFB).with_padding(Padding::NONE),
            b"not block aligned",
            &options,
        )
        .unwrap();
    assert_eq!(via_alias, via_builtin);
    assert_eq!(registry.mode_name(ofb_alias).unwrap(), "OFB-ALIAS");
    assert!(default_registry().mode_name(ofb_alias).is_err());
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(Engine::default());
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let options = Options::new([i; 32]).with_iv([i & 0x7F; 16]);
                let selection = Selection::new(Multiple::KUZNYECHIK).with_mode(Mode::MGM);
                let message = vec![i; 100 + i as usize];
                let sealed = engine.encrypt(&selection, &message, &options).unwrap();
                let opened = engine.decrypt(&selection, &sealed, &options).unwrap();
                assert_eq!(opened, message);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let builder = Arc::new(RegistryBuilder::with_defaults());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let builder = Arc::clone(&builder);
            thread::spawn(move || {
                let token = Multiple::generate();
                builder.add_multiple(
                    token,
                    move || format!("Toy{}", i),
                    MultipleEntry::block(xor_rotate),
                );
                token
            })
        })
        .collect();
    let tokens: Vec<Multiple> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let registry = builder.build();
    assert_eq!(registry.multiples().len(), 8 + 8);
    for (i, token) in tokens.into_iter().enumerate() {
        assert_eq!(registry.multiple_name(token).unwrap(), format!("Toy{}", i));
    }
}
