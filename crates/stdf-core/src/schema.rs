//! Field descriptors and the built-in STDF V4 schema table.
//!
//! Each record type maps to a static, ordered list of [`FieldDescriptor`]s.
//! The type codes are the schema's own strings and are never rewritten:
//!
//! | Code      | Meaning                                              |
//! |-----------|------------------------------------------------------|
//! | `U1`..`U4`| unsigned integer of 1, 2 or 4 bytes                  |
//! | `I1`..`I4`| signed integer                                       |
//! | `R4`,`R8` | floating point                                       |
//! | `C1`,`Cn` | single character / length-prefixed string            |
//! | `B1`,`N1` | one byte, one nibble                                 |
//! | `Bn`,`Dn` | byte field / bit field                               |
//! | `kNXX`    | array of `XX`; `N` is the index of the count field   |
//! | `Vn`      | self-describing generic data                         |

use std::fmt;

/// A schema type code such as `U4`, `Cn` or `k5N1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeCode(&'static str);

impl TypeCode {
    pub const fn new(code: &'static str) -> Self {
        TypeCode(code)
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// `true` for `k`-prefixed array codes.
    #[inline]
    pub fn is_array(self) -> bool {
        self.0.starts_with('k')
    }

    /// Element code of an array type (`k12U2` → `U2`), `None` for scalars.
    ///
    /// The count-field index may have more than one digit.
    pub fn element(self) -> Option<TypeCode> {
        self.0
            .strip_prefix('k')
            .map(|rest| TypeCode(rest.trim_start_matches(|c: char| c.is_ascii_digit())))
    }

    /// `B1` and `N1`: values that render as two hex digits inside arrays.
    #[inline]
    pub fn is_one_byte_numeric(self) -> bool {
        matches!(self.0, "B1" | "N1")
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One field position within a record type.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FieldDescriptor {
    pub name:      &'static str,
    pub type_code: TypeCode,
}

impl FieldDescriptor {
    /// Date-time fields are named with a `_T` suffix (`START_T`, `FINISH_T`).
    #[inline]
    pub fn is_date_time(&self) -> bool {
        self.name.ends_with("_T")
    }
}

/// Build one `static` descriptor list per record type.
macro_rules! schema {
    ($($table:ident = [$($field:ident : $code:ident),* $(,)?];)*) => {
        $(
            pub static $table: &[FieldDescriptor] = &[
                $(FieldDescriptor {
                    name:      stringify!($field),
                    type_code: TypeCode::new(stringify!($code)),
                }),*
            ];
        )*
    };
}

schema! {
    FAR = [CPU_TYPE: U1, STDF_VER: U1];
    ATR = [MOD_TIM: U4, CMD_LINE: Cn];
    MIR = [
        SETUP_T: U4, START_T: U4, STAT_NUM: U1, MODE_COD: C1, RTST_COD: C1,
        PROT_COD: C1, BURN_TIM: U2, CMOD_COD: C1, LOT_ID: Cn, PART_TYP: Cn,
        NODE_NAM: Cn, TSTR_TYP: Cn, JOB_NAM: Cn, JOB_REV: Cn, SBLOT_ID: Cn,
        OPER_NAM: Cn, EXEC_TYP: Cn, EXEC_VER: Cn, TEST_COD: Cn, TST_TEMP: Cn,
        USER_TXT: Cn, AUX_FILE: Cn, PKG_TYP: Cn, FAMLY_ID: Cn, DATE_COD: Cn,
        FACIL_ID: Cn, FLOOR_ID: Cn, PROC_ID: Cn, OPER_FRQ: Cn, SPEC_NAM: Cn,
        SPEC_VER: Cn, FLOW_ID: Cn, SETUP_ID: Cn, DSGN_REV: Cn, ENG_ID: Cn,
        ROM_COD: Cn, SERL_NUM: Cn, SUPR_NAM: Cn,
    ];
    MRR = [FINISH_T: U4, DISP_COD: C1, USR_DESC: Cn, EXC_DESC: Cn];
    PCR = [
        HEAD_NUM: U1, SITE_NUM: U1, PART_CNT: U4, RTST_CNT: U4, ABRT_CNT: U4,
        GOOD_CNT: U4, FUNC_CNT: U4,
    ];
    HBR = [HEAD_NUM: U1, SITE_NUM: U1, HBIN_NUM: U2, HBIN_CNT: U4, HBIN_PF: C1, HBIN_NAM: Cn];
    SBR = [HEAD_NUM: U1, SITE_NUM: U1, SBIN_NUM: U2, SBIN_CNT: U4, SBIN_PF: C1, SBIN_NAM: Cn];
    PMR = [
        PMR_INDX: U2, CHAN_TYP: U2, CHAN_NAM: Cn, PHY_NAM: Cn, LOG_NAM: Cn,
        HEAD_NUM: U1, SITE_NUM: U1,
    ];
    PGR = [GRP_INDX: U2, GRP_NAM: Cn, INDX_CNT: U2, PMR_INDX: k2U2];
    PLR = [
        GRP_CNT: U2, GRP_INDX: k0U2, GRP_MODE: k0U2, GRP_RADX: k0U1,
        PGM_CHAR: k0Cn, RTN_CHAR: k0Cn, PGM_CHAL: k0Cn, RTN_CHAL: k0Cn,
    ];
    RDR = [NUM_BINS: U2, RTST_BIN: k0U2];
    SDR = [
        HEAD_NUM: U1, SITE_GRP: U1, SITE_CNT: U1, SITE_NUM: k2U1, HAND_TYP: Cn,
        HAND_ID: Cn, CARD_TYP: Cn, CARD_ID: Cn, LOAD_TYP: Cn, LOAD_ID: Cn,
        DIB_TYP: Cn, DIB_ID: Cn, CABL_TYP: Cn, CABL_ID: Cn, CONT_TYP: Cn,
        CONT_ID: Cn, LASR_TYP: Cn, LASR_ID: Cn, EXTR_TYP: Cn, EXTR_ID: Cn,
    ];
    WIR = [HEAD_NUM: U1, SITE_GRP: U1, START_T: U4, WAFER_ID: Cn];
    WRR = [
        HEAD_NUM: U1, SITE_GRP: U1, FINISH_T: U4, PART_CNT: U4, RTST_CNT: U4,
        ABRT_CNT: U4, GOOD_CNT: U4, FUNC_CNT: U4, WAFER_ID: Cn, FABWF_ID: Cn,
        FRAME_ID: Cn, MASK_ID: Cn, USR_DESC: Cn, EXC_DESC: Cn,
    ];
    WCR = [
        WAFR_SIZ: R4, DIE_HT: R4, DIE_WID: R4, WF_UNITS: U1, WF_FLAT: C1,
        CENTER_X: I2, CENTER_Y: I2, POS_X: C1, POS_Y: C1,
    ];
    PIR = [HEAD_NUM: U1, SITE_NUM: U1];
    PRR = [
        HEAD_NUM: U1, SITE_NUM: U1, PART_FLG: B1, NUM_TEST: U2, HARD_BIN: U2,
        SOFT_BIN: U2, X_COORD: I2, Y_COORD: I2, TEST_T: U4, PART_ID: Cn,
        PART_TXT: Cn, PART_FIX: Bn,
    ];
    TSR = [
        HEAD_NUM: U1, SITE_NUM: U1, TEST_TYP: C1, TEST_NUM: U4, EXEC_CNT: U4,
        FAIL_CNT: U4, ALRM_CNT: U4, TEST_NAM: Cn, SEQ_NAME: Cn, TEST_LBL: Cn,
        OPT_FLAG: B1, TEST_TIM: R4, TEST_MIN: R4, TEST_MAX: R4, TST_SUMS: R4,
        TST_SQRS: R4,
    ];
    PTR = [
        TEST_NUM: U4, HEAD_NUM: U1, SITE_NUM: U1, TEST_FLG: B1, PARM_FLG: B1,
        RESULT: R4, TEST_TXT: Cn, ALARM_ID: Cn, OPT_FLAG: B1, RES_SCAL: I1,
        LLM_SCAL: I1, HLM_SCAL: I1, LO_LIMIT: R4, HI_LIMIT: R4, UNITS: Cn,
        C_RESFMT: Cn, C_LLMFMT: Cn, C_HLMFMT: Cn, LO_SPEC: R4, HI_SPEC: R4,
    ];
    MPR = [
        TEST_NUM: U4, HEAD_NUM: U1, SITE_NUM: U1, TEST_FLG: B1, PARM_FLG: B1,
        RTN_ICNT: U2, RSLT_CNT: U2, RTN_STAT: k5N1, RTN_RSLT: k6R4, TEST_TXT: Cn,
        ALARM_ID: Cn, OPT_FLAG: B1, RES_SCAL: I1, LLM_SCAL: I1, HLM_SCAL: I1,
        LO_LIMIT: R4, HI_LIMIT: R4, START_IN: R4, INCR_IN: R4, RTN_INDX: k5U2,
        UNITS: Cn, UNITS_IN: Cn, C_RESFMT: Cn, C_LLMFMT: Cn, C_HLMFMT: Cn,
        LO_SPEC: R4, HI_SPEC: R4,
    ];
    FTR = [
        TEST_NUM: U4, HEAD_NUM: U1, SITE_NUM: U1, TEST_FLG: B1, OPT_FLAG: B1,
        CYCL_CNT: U4, REL_VADR: U4, REPT_CNT: U4, NUM_FAIL: U4, XFAIL_AD: I4,
        YFAIL_AD: I4, VECT_OFF: I2, RTN_ICNT: U2, PGM_ICNT: U2, RTN_INDX: k12U2,
        RTN_STAT: k12N1, PGM_INDX: k13U2, PGM_STAT: k13N1, FAIL_PIN: Dn,
        VECT_NAM: Cn, TIME_SET: Cn, OP_CODE: Cn, TEST_TXT: Cn, ALARM_ID: Cn,
        PROG_TXT: Cn, RSLT_TXT: Cn, PATG_NUM: U1, SPIN_MAP: Dn,
    ];
    BPS = [SEQ_NAME: Cn];
    EPS = [];
    GDR = [FLD_CNT: U2, GEN_DATA: Vn];
    DTR = [TEXT_DAT: Cn];
}
