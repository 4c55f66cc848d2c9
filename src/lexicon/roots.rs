//! Indonesian root words guarding the affix stripper against over-stemming.
//!
//! Lexicon words, negators and Indonesian aspect triggers are merged in at
//! construction so every word the scorer or tagger knows is treated as a root.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::lexicon::{aspects::APP_ASPECTS, polarity};

const COMMON_ROOTS: &[&str] = &[
    "ajar", "ambil", "aplikasi", "akses", "akun", "atur", "bagi", "baca", "bahasa", "bayar",
    "beli", "berat", "berita", "bicara", "buka", "buat", "cari", "coba", "daftar", "dapat",
    "dengar", "diam", "edit", "fitur", "foto", "fungsi", "ganti", "guna", "harga", "hapus",
    "hasil", "hubung", "iklan", "ingat", "isi", "izin", "jalan", "jawab", "jual", "kabar",
    "kali", "kecil", "kembali", "kenal", "kerja", "kirim", "koneksi", "konten", "kualitas",
    "kurang", "laku", "layan", "lihat", "login", "lupa", "main", "makan", "maksud", "masalah",
    "masuk", "menu", "milik", "minta", "muat", "nilai", "nomor", "pakai", "pasang", "pesan",
    "pilih", "pikir", "privasi", "promosi", "proses", "pulsa", "rasa", "saldo", "salah",
    "sedia", "sinyal", "tampil", "tambah", "tanya", "tawar", "tekan", "temu", "tolong",
    "tulis", "tunggu", "tutup", "ubah", "uang", "ulang", "unggah", "urus", "verifikasi",
    "waktu", "warna",
];

pub static INDONESIAN_ROOTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut roots: HashSet<&'static str> = COMMON_ROOTS.iter().copied().collect();
    roots.extend(polarity::WORDS.iter().map(|(w, _, _)| *w));
    roots.extend(polarity::NEGATORS.iter().copied());
    roots.extend(polarity::INTENSIFIERS.iter().map(|(w, _)| *w));
    for (_, keywords) in APP_ASPECTS {
        roots.extend(keywords.iter().copied().filter(|k| !k.contains(' ')));
    }
    roots
});
