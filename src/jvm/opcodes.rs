//! JVM opcode bytes and their mnemonics
//!
//! Only the opcodes that can appear in a tree instruction list are named here: `wide` and the
//! `_w`/`_n` short forms are folded into their canonical instruction, as a disassembler would.

pub const NOP: u8 = 0x00;
pub const ACONST_NULL: u8 = 0x01;
pub const ICONST_M1: u8 = 0x02;
pub const ICONST_0: u8 = 0x03;
pub const ICONST_1: u8 = 0x04;
pub const ICONST_2: u8 = 0x05;
pub const ICONST_3: u8 = 0x06;
pub const ICONST_4: u8 = 0x07;
pub const ICONST_5: u8 = 0x08;
pub const LCONST_0: u8 = 0x09;
pub const LCONST_1: u8 = 0x0a;
pub const FCONST_0: u8 = 0x0b;
pub const FCONST_1: u8 = 0x0c;
pub const FCONST_2: u8 = 0x0d;
pub const DCONST_0: u8 = 0x0e;
pub const DCONST_1: u8 = 0x0f;
pub const BIPUSH: u8 = 0x10;
pub const SIPUSH: u8 = 0x11;
pub const LDC: u8 = 0x12;
pub const ILOAD: u8 = 0x15;
pub const LLOAD: u8 = 0x16;
pub const FLOAD: u8 = 0x17;
pub const DLOAD: u8 = 0x18;
pub const ALOAD: u8 = 0x19;
pub const IALOAD: u8 = 0x2e;
pub const LALOAD: u8 = 0x2f;
pub const FALOAD: u8 = 0x30;
pub const DALOAD: u8 = 0x31;
pub const AALOAD: u8 = 0x32;
pub const BALOAD: u8 = 0x33;
pub const CALOAD: u8 = 0x34;
pub const SALOAD: u8 = 0x35;
pub const ISTORE: u8 = 0x36;
pub const LSTORE: u8 = 0x37;
pub const FSTORE: u8 = 0x38;
pub const DSTORE: u8 = 0x39;
pub const ASTORE: u8 = 0x3a;
pub const IASTORE: u8 = 0x4f;
pub const LASTORE: u8 = 0x50;
pub const FASTORE: u8 = 0x51;
pub const DASTORE: u8 = 0x52;
pub const AASTORE: u8 = 0x53;
pub const BASTORE: u8 = 0x54;
pub const CASTORE: u8 = 0x55;
pub const SASTORE: u8 = 0x56;
pub const POP: u8 = 0x57;
pub const POP2: u8 = 0x58;
pub const DUP: u8 = 0x59;
pub const DUP_X1: u8 = 0x5a;
pub const DUP_X2: u8 = 0x5b;
pub const DUP2: u8 = 0x5c;
pub const DUP2_X1: u8 = 0x5d;
pub const DUP2_X2: u8 = 0x5e;
pub const SWAP: u8 = 0x5f;
pub const IADD: u8 = 0x60;
pub const LADD: u8 = 0x61;
pub const FADD: u8 = 0x62;
pub const DADD: u8 = 0x63;
pub const ISUB: u8 = 0x64;
pub const LSUB: u8 = 0x65;
pub const FSUB: u8 = 0x66;
pub const DSUB: u8 = 0x67;
pub const IMUL: u8 = 0x68;
pub const LMUL: u8 = 0x69;
pub const FMUL: u8 = 0x6a;
pub const DMUL: u8 = 0x6b;
pub const IDIV: u8 = 0x6c;
pub const LDIV: u8 = 0x6d;
pub const FDIV: u8 = 0x6e;
pub const DDIV: u8 = 0x6f;
pub const IREM: u8 = 0x70;
pub const LREM: u8 = 0x71;
pub const FREM: u8 = 0x72;
pub const DREM: u8 = 0x73;
pub const INEG: u8 = 0x74;
pub const LNEG: u8 = 0x75;
pub const FNEG: u8 = 0x76;
pub const DNEG: u8 = 0x77;
pub const ISHL: u8 = 0x78;
pub const LSHL: u8 = 0x79;
pub const ISHR: u8 = 0x7a;
pub const LSHR: u8 = 0x7b;
pub const IUSHR: u8 = 0x7c;
pub const LUSHR: u8 = 0x7d;
pub const IAND: u8 = 0x7e;
pub const LAND: u8 = 0x7f;
pub const IOR: u8 = 0x80;
pub const LOR: u8 = 0x81;
pub const IXOR: u8 = 0x82;
pub const LXOR: u8 = 0x83;
pub const IINC: u8 = 0x84;
pub const I2L: u8 = 0x85;
pub const I2F: u8 = 0x86;
pub const I2D: u8 = 0x87;
pub const L2I: u8 = 0x88;
pub const L2F: u8 = 0x89;
pub const L2D: u8 = 0x8a;
pub const F2I: u8 = 0x8b;
pub const F2L: u8 = 0x8c;
pub const F2D: u8 = 0x8d;
pub const D2I: u8 = 0x8e;
pub const D2L: u8 = 0x8f;
pub const D2F: u8 = 0x90;
pub const I2B: u8 = 0x91;
pub const I2C: u8 = 0x92;
pub const I2S: u8 = 0x93;
pub const LCMP: u8 = 0x94;
pub const FCMPL: u8 = 0x95;
pub const FCMPG: u8 = 0x96;
pub const DCMPL: u8 = 0x97;
pub const DCMPG: u8 = 0x98;
pub const IFEQ: u8 = 0x99;
pub const IFNE: u8 = 0x9a;
pub const IFLT: u8 = 0x9b;
pub const IFGE: u8 = 0x9c;
pub const IFGT: u8 = 0x9d;
pub const IFLE: u8 = 0x9e;
pub const IF_ICMPEQ: u8 = 0x9f;
pub const IF_ICMPNE: u8 = 0xa0;
pub const IF_ICMPLT: u8 = 0xa1;
pub const IF_ICMPGE: u8 = 0xa2;
pub const IF_ICMPGT: u8 = 0xa3;
pub const IF_ICMPLE: u8 = 0xa4;
pub const IF_ACMPEQ: u8 = 0xa5;
pub const IF_ACMPNE: u8 = 0xa6;
pub const GOTO: u8 = 0xa7;
pub const JSR: u8 = 0xa8;
pub const RET: u8 = 0xa9;
pub const TABLESWITCH: u8 = 0xaa;
pub const LOOKUPSWITCH: u8 = 0xab;
pub const IRETURN: u8 = 0xac;
pub const LRETURN: u8 = 0xad;
pub const FRETURN: u8 = 0xae;
pub const DRETURN: u8 = 0xaf;
pub const ARETURN: u8 = 0xb0;
pub const RETURN: u8 = 0xb1;
pub const GETSTATIC: u8 = 0xb2;
pub const PUTSTATIC: u8 = 0xb3;
pub const GETFIELD: u8 = 0xb4;
pub const PUTFIELD: u8 = 0xb5;
pub const INVOKEVIRTUAL: u8 = 0xb6;
pub const INVOKESPECIAL: u8 = 0xb7;
pub const INVOKESTATIC: u8 = 0xb8;
pub const INVOKEINTERFACE: u8 = 0xb9;
pub const INVOKEDYNAMIC: u8 = 0xba;
pub const NEW: u8 = 0xbb;
pub const NEWARRAY: u8 = 0xbc;
pub const ANEWARRAY: u8 = 0xbd;
pub const ARRAYLENGTH: u8 = 0xbe;
pub const ATHROW: u8 = 0xbf;
pub const CHECKCAST: u8 = 0xc0;
pub const INSTANCEOF: u8 = 0xc1;
pub const MONITORENTER: u8 = 0xc2;
pub const MONITOREXIT: u8 = 0xc3;
pub const MULTIANEWARRAY: u8 = 0xc5;
pub const IFNULL: u8 = 0xc6;
pub const IFNONNULL: u8 = 0xc7;

/// `newarray` operand codes for primitive element types
pub const T_BOOLEAN: i32 = 4;
pub const T_CHAR: i32 = 5;
pub const T_FLOAT: i32 = 6;
pub const T_DOUBLE: i32 = 7;
pub const T_BYTE: i32 = 8;
pub const T_SHORT: i32 = 9;
pub const T_INT: i32 = 10;
pub const T_LONG: i32 = 11;

/// Mnemonic of an opcode (eg. `ICONST_1` for `0x04`)
///
/// Opcodes without a canonical tree form render as `UNKNOWN_<hex>` rather than failing.
pub fn mnemonic(opcode: u8) -> String {
    match MNEMONICS.get(opcode as usize).copied().flatten() {
        Some(name) => name.to_owned(),
        None => format!("UNKNOWN_{:02X}", opcode),
    }
}

/// Name of a `newarray` element type code (eg. `T_INT`)
pub fn array_type_name(operand: i32) -> String {
    let name = match operand {
        T_BOOLEAN => "T_BOOLEAN",
        T_CHAR => "T_CHAR",
        T_FLOAT => "T_FLOAT",
        T_DOUBLE => "T_DOUBLE",
        T_BYTE => "T_BYTE",
        T_SHORT => "T_SHORT",
        T_INT => "T_INT",
        T_LONG => "T_LONG",
        other => return other.to_string(),
    };
    name.to_owned()
}

const MNEMONICS: [Option<&str>; 0xc8] = {
    let mut table: [Option<&str>; 0xc8] = [None; 0xc8];
    table[NOP as usize] = Some("NOP");
    table[ACONST_NULL as usize] = Some("ACONST_NULL");
    table[ICONST_M1 as usize] = Some("ICONST_M1");
    table[ICONST_0 as usize] = Some("ICONST_0");
    table[ICONST_1 as usize] = Some("ICONST_1");
    table[ICONST_2 as usize] = Some("ICONST_2");
    table[ICONST_3 as usize] = Some("ICONST_3");
    table[ICONST_4 as usize] = Some("ICONST_4");
    table[ICONST_5 as usize] = Some("ICONST_5");
    table[LCONST_0 as usize] = Some("LCONST_0");
    table[LCONST_1 as usize] = Some("LCONST_1");
    table[FCONST_0 as usize] = Some("FCONST_0");
    table[FCONST_1 as usize] = Some("FCONST_1");
    table[FCONST_2 as usize] = Some("FCONST_2");
    table[DCONST_0 as usize] = Some("DCONST_0");
    table[DCONST_1 as usize] = Some("DCONST_1");
    table[BIPUSH as usize] = Some("BIPUSH");
    table[SIPUSH as usize] = Some("SIPUSH");
    table[LDC as usize] = Some("LDC");
    table[ILOAD as usize] = Some("ILOAD");
    table[LLOAD as usize] = Some("LLOAD");
    table[FLOAD as usize] = Some("FLOAD");
    table[DLOAD as usize] = Some("DLOAD");
    table[ALOAD as usize] = Some("ALOAD");
    table[IALOAD as usize] = Some("IALOAD");
    table[LALOAD as usize] = Some("LALOAD");
    table[FALOAD as usize] = Some("FALOAD");
    table[DALOAD as usize] = Some("DALOAD");
    table[AALOAD as usize] = Some("AALOAD");
    table[BALOAD as usize] = Some("BALOAD");
    table[CALOAD as usize] = Some("CALOAD");
    table[SALOAD as usize] = Some("SALOAD");
    table[ISTORE as usize] = Some("ISTORE");
    table[LSTORE as usize] = Some("LSTORE");
    table[FSTORE as usize] = Some("FSTORE");
    table[DSTORE as usize] = Some("DSTORE");
    table[ASTORE as usize] = Some("ASTORE");
    table[IASTORE as usize] = Some("IASTORE");
    table[LASTORE as usize] = Some("LASTORE");
    table[FASTORE as usize] = Some("FASTORE");
    table[DASTORE as usize] = Some("DASTORE");
    table[AASTORE as usize] = Some("AASTORE");
    table[BASTORE as usize] = Some("BASTORE");
    table[CASTORE as usize] = Some("CASTORE");
    table[SASTORE as usize] = Some("SASTORE");
    table[POP as usize] = Some("POP");
    table[POP2 as usize] = Some("POP2");
    table[DUP as usize] = Some("DUP");
    table[DUP_X1 as usize] = Some("DUP_X1");
    table[DUP_X2 as usize] = Some("DUP_X2");
    table[DUP2 as usize] = Some("DUP2");
    table[DUP2_X1 as usize] = Some("DUP2_X1");
    table[DUP2_X2 as usize] = Some("DUP2_X2");
    table[SWAP as usize] = Some("SWAP");
    table[IADD as usize] = Some("IADD");
    table[LADD as usize] = Some("LADD");
    table[FADD as usize] = Some("FADD");
    table[DADD as usize] = Some("DADD");
    table[ISUB as usize] = Some("ISUB");
    table[LSUB as usize] = Some("LSUB");
    table[FSUB as usize] = Some("FSUB");
    table[DSUB as usize] = Some("DSUB");
    table[IMUL as usize] = Some("IMUL");
    table[LMUL as usize] = Some("LMUL");
    table[FMUL as usize] = Some("FMUL");
    table[DMUL as usize] = Some("DMUL");
    table[IDIV as usize] = Some("IDIV");
    table[LDIV as usize] = Some("LDIV");
    table[FDIV as usize] = Some("FDIV");
    table[DDIV as usize] = Some("DDIV");
    table[IREM as usize] = Some("IREM");
    table[LREM as usize] = Some("LREM");
    table[FREM as usize] = Some("FREM");
    table[DREM as usize] = Some("DREM");
    table[INEG as usize] = Some("INEG");
    table[LNEG as usize] = Some("LNEG");
    table[FNEG as usize] = Some("FNEG");
    table[DNEG as usize] = Some("DNEG");
    table[ISHL as usize] = Some("ISHL");
    table[LSHL as usize] = Some("LSHL");
    table[ISHR as usize] = Some("ISHR");
    table[LSHR as usize] = Some("LSHR");
    table[IUSHR as usize] = Some("IUSHR");
    table[LUSHR as usize] = Some("LUSHR");
    table[IAND as usize] = Some("IAND");
    table[LAND as usize] = Some("LAND");
    table[IOR as usize] = Some("IOR");
    table[LOR as usize] = Some("LOR");
    table[IXOR as usize] = Some("IXOR");
    table[LXOR as usize] = Some("LXOR");
    table[IINC as usize] = Some("IINC");
    table[I2L as usize] = Some("I2L");
    table[I2F as usize] = Some("I2F");
    table[I2D as usize] = Some("I2D");
    table[L2I as usize] = Some("L2I");
    table[L2F as usize] = Some("L2F");
    table[L2D as usize] = Some("L2D");
    table[F2I as usize] = Some("F2I");
    table[F2L as usize] = Some("F2L");
    table[F2D as usize] = Some("F2D");
    table[D2I as usize] = Some("D2I");
    table[D2L as usize] = Some("D2L");
    table[D2F as usize] = Some("D2F");
    table[I2B as usize] = Some("I2B");
    table[I2C as usize] = Some("I2C");
    table[I2S as usize] = Some("I2S");
    table[LCMP as usize] = Some("LCMP");
    table[FCMPL as usize] = Some("FCMPL");
    table[FCMPG as usize] = Some("FCMPG");
    table[DCMPL as usize] = Some("DCMPL");
    table[DCMPG as usize] = Some("DCMPG");
    table[IFEQ as usize] = Some("IFEQ");
    table[IFNE as usize] = Some("IFNE");
    table[IFLT as usize] = Some("IFLT");
    table[IFGE as usize] = Some("IFGE");
    table[IFGT as usize] = Some("IFGT");
    table[IFLE as usize] = Some("IFLE");
    table[IF_ICMPEQ as usize] = Some("IF_ICMPEQ");
    table[IF_ICMPNE as usize] = Some("IF_ICMPNE");
    table[IF_ICMPLT as usize] = Some("IF_ICMPLT");
    table[IF_ICMPGE as usize] = Some("IF_ICMPGE");
    table[IF_ICMPGT as usize] = Some("IF_ICMPGT");
    table[IF_ICMPLE as usize] = Some("IF_ICMPLE");
    table[IF_ACMPEQ as usize] = Some("IF_ACMPEQ");
    table[IF_ACMPNE as usize] = Some("IF_ACMPNE");
    table[GOTO as usize] = Some("GOTO");
    table[JSR as usize] = Some("JSR");
    table[RET as usize] = Some("RET");
    table[TABLESWITCH as usize] = Some("TABLESWITCH");
    table[LOOKUPSWITCH as usize] = Some("LOOKUPSWITCH");
    table[IRETURN as usize] = Some("IRETURN");
    table[LRETURN as usize] = Some("LRETURN");
    table[FRETURN as usize] = Some("FRETURN");
    table[DRETURN as usize] = Some("DRETURN");
    table[ARETURN as usize] = Some("ARETURN");
    table[RETURN as usize] = Some("RETURN");
    table[GETSTATIC as usize] = Some("GETSTATIC");
    table[PUTSTATIC as usize] = Some("PUTSTATIC");
    table[GETFIELD as usize] = Some("GETFIELD");
    table[PUTFIELD as usize] = Some("PUTFIELD");
    table[INVOKEVIRTUAL as usize] = Some("INVOKEVIRTUAL");
    table[INVOKESPECIAL as usize] = Some("INVOKESPECIAL");
    table[INVOKESTATIC as usize] = Some("INVOKESTATIC");
    table[INVOKEINTERFACE as usize] = Some("INVOKEINTERFACE");
    table[INVOKEDYNAMIC as usize] = Some("INVOKEDYNAMIC");
    table[NEW as usize] = Some("NEW");
    table[NEWARRAY as usize] = Some("NEWARRAY");
    table[ANEWARRAY as usize] = Some("ANEWARRAY");
    table[ARRAYLENGTH as usize] = Some("ARRAYLENGTH");
    table[ATHROW as usize] = Some("ATHROW");
    table[CHECKCAST as usize] = Some("CHECKCAST");
    table[INSTANCEOF as usize] = Some("INSTANCEOF");
    table[MONITORENTER as usize] = Some("MONITORENTER");
    table[MONITOREXIT as usize] = Some("MONITOREXIT");
    table[MULTIANEWARRAY as usize] = Some("MULTIANEWARRAY");
    table[IFNULL as usize] = Some("IFNULL");
    table[IFNONNULL as usize] = Some("IFNONNULL");
    table
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(mnemonic(ICONST_1), "ICONST_1");
        assert_eq!(mnemonic(IRETURN), "IRETURN");
        assert_eq!(mnemonic(IFNONNULL), "IFNONNULL");
        assert_eq!(mnemonic(0xc4), "UNKNOWN_C4");
        assert_eq!(mnemonic(0xff), "UNKNOWN_FF");
    }
}
